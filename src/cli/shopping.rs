use anyhow::Result;

#[tracing::instrument(skip(config))]
pub async fn shopping_list(config: pantry::Config, plan_id: String) -> Result<()> {
    let pool = pantry::create_pool(&config.database.url, 1).await?;
    let command = pantry_shopping::Command::new(pantry_shared::State::single(pool));

    let view = command.view(plan_id).await?;
    println!("{}", view.text);

    Ok(())
}

#[tracing::instrument(skip(config))]
pub async fn exclude(config: pantry::Config, plan_id: String, names: Vec<String>) -> Result<()> {
    let pool = pantry::create_pool(&config.database.url, 1).await?;
    let command = pantry_shopping::Command::new(pantry_shared::State::single(pool));

    let exclusions = command.exclude(&plan_id, names).await?;
    tracing::info!(plan = %plan_id, total = exclusions.len(), "exclusions updated");

    for name in exclusions.iter() {
        println!("{name}");
    }

    Ok(())
}
