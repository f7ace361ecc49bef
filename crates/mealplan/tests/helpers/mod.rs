use std::{path::PathBuf, str::FromStr};

use pantry_mealplan::{CreateRecipeInput, DayInput, SavePlanInput};
use pantry_shared::{State, mealplan::Weekday};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    pantry_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(State::single(pool))
}

#[allow(dead_code)]
pub async fn create_recipe(
    cmd: &pantry_mealplan::Command,
    name: impl Into<String>,
    markup: impl Into<String>,
) -> anyhow::Result<String> {
    Ok(cmd
        .create_recipe(CreateRecipeInput {
            name: name.into(),
            markup: markup.into(),
        })
        .await?)
}

#[allow(dead_code)]
pub async fn save_plan(
    cmd: &pantry_mealplan::Command,
    days: Vec<(Weekday, Option<&str>)>,
) -> anyhow::Result<String> {
    Ok(cmd
        .save_plan(SavePlanInput {
            name: "my week".to_owned(),
            days: days
                .into_iter()
                .map(|(day, recipe_id)| DayInput {
                    day,
                    recipe_id: recipe_id.map(ToOwned::to_owned),
                })
                .collect(),
        })
        .await?)
}
