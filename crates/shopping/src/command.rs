use pantry_db::table::{PlanExclusion, ShoppingList};
use sea_query::{Expr, ExprTrait, OnConflict, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use std::ops::Deref;
use time::OffsetDateTime;

use crate::{ExclusionSet, IngredientCount, RecipeIngredients};

/// What a plan owner sees when opening the shopping list.
#[derive(Serialize, Clone, Debug)]
pub struct ShoppingListView {
    pub plan_id: String,
    pub by_recipe: Vec<RecipeIngredients>,
    pub items: Vec<IngredientCount>,
    pub text: String,
}

#[derive(Clone)]
pub struct Command {
    state: pantry_shared::State,
}

impl Deref for Command {
    type Target = pantry_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl Command {
    pub fn new(state: pantry_shared::State) -> Self {
        Self { state }
    }

    async fn ensure_plan(&self, plan_id: &str) -> pantry_shared::Result<()> {
        let plan = pantry_mealplan::Query(self.read_db.clone())
            .find_plan(plan_id)
            .await?;

        if plan.is_none() {
            pantry_shared::not_found!("meal plan {plan_id}");
        }

        Ok(())
    }

    /// Adds names to the plan's exclusion set and returns the resulting set.
    ///
    /// The stored shopping list text is left as is until the next [`Command::view`].
    pub async fn exclude<I, S>(
        &self,
        plan_id: impl Into<String>,
        names: I,
    ) -> pantry_shared::Result<ExclusionSet>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let plan_id = plan_id.into();
        self.ensure_plan(&plan_id).await?;

        let names = ExclusionSet::from_iter(names);
        if !names.is_empty() {
            let created_at = OffsetDateTime::now_utc().unix_timestamp();
            let mut statement = Query::insert()
                .into_table(PlanExclusion::Table)
                .columns([
                    PlanExclusion::PlanId,
                    PlanExclusion::Name,
                    PlanExclusion::CreatedAt,
                ])
                .on_conflict(
                    OnConflict::columns([PlanExclusion::PlanId, PlanExclusion::Name])
                        .do_nothing()
                        .to_owned(),
                )
                .to_owned();

            for name in names.iter() {
                statement.values_panic([
                    plan_id.to_owned().into(),
                    name.to_owned().into(),
                    created_at.into(),
                ]);
            }

            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            sqlx::query_with(&sql, values)
                .execute(&self.write_db)
                .await?;

            tracing::info!(plan = %plan_id, names = names.len(), "ingredients excluded");
        }

        crate::Query(self.read_db.clone()).exclusions(plan_id).await
    }

    pub async fn reset_exclusions(&self, plan_id: impl Into<String>) -> pantry_shared::Result<()> {
        let plan_id = plan_id.into();
        self.ensure_plan(&plan_id).await?;

        let statement = Query::delete()
            .from_table(PlanExclusion::Table)
            .and_where(Expr::col(PlanExclusion::PlanId).eq(&plan_id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        tracing::info!(plan = %plan_id, "exclusions reset");

        Ok(())
    }

    /// Computes the plan's shopping list and stores its text.
    ///
    /// Every call overwrites the stored text, any edit made to the stored
    /// record in between is lost. The stored text is never read back here.
    pub async fn view(&self, plan_id: impl Into<String>) -> pantry_shared::Result<ShoppingListView> {
        let plan_id = plan_id.into();
        let days = pantry_mealplan::Query(self.read_db.clone())
            .plan_days(&plan_id)
            .await?;
        let exclusions = crate::Query(self.read_db.clone())
            .exclusions(&plan_id)
            .await?;

        let aggregation = crate::aggregate(&days, &exclusions);
        let text = crate::format(&aggregation.items);

        let statement = Query::insert()
            .into_table(ShoppingList::Table)
            .columns([
                ShoppingList::PlanId,
                ShoppingList::CreatedAt,
                ShoppingList::Ingredients,
            ])
            .values_panic([
                plan_id.to_owned().into(),
                OffsetDateTime::now_utc().unix_timestamp().into(),
                text.to_owned().into(),
            ])
            .on_conflict(
                OnConflict::columns([ShoppingList::PlanId])
                    .update_column(ShoppingList::Ingredients)
                    .to_owned(),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        tracing::info!(
            plan = %plan_id,
            recipes = aggregation.by_recipe.len(),
            items = aggregation.items.len(),
            "shopping list stored"
        );

        Ok(ShoppingListView {
            plan_id,
            by_recipe: aggregation.by_recipe,
            items: aggregation.items,
            text,
        })
    }
}
