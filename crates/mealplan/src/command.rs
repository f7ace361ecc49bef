use pantry_db::table::{MealPlan, MealPlanDay, PlanExclusion, Recipe, ShoppingList};
use pantry_shared::mealplan::Weekday;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use std::{
    collections::{HashMap, HashSet},
    ops::Deref,
};
use strum::VariantArray;
use time::OffsetDateTime;
use ulid::Ulid;

use crate::{CreateRecipeInput, SavePlanInput, UpdateRecipeInput};

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

    pub async fn create_recipe(&self, input: CreateRecipeInput) -> pantry_shared::Result<String> {
        let name = input.name.trim();
        if name.is_empty() {
            pantry_shared::user!("recipe name is required");
        }

        let id = Ulid::new().to_string();
        let statement = Query::insert()
            .into_table(Recipe::Table)
            .columns([Recipe::Id, Recipe::Name, Recipe::Markup, Recipe::CreatedAt])
            .values_panic([
                id.to_owned().into(),
                name.to_owned().into(),
                input.markup.into(),
                OffsetDateTime::now_utc().unix_timestamp().into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        tracing::info!(recipe = %id, "recipe created");

        Ok(id)
    }

    pub async fn update_recipe(
        &self,
        id: impl Into<String>,
        input: UpdateRecipeInput,
    ) -> pantry_shared::Result<()> {
        let id = id.into();
        let name = input.name.trim();
        if name.is_empty() {
            pantry_shared::user!("recipe name is required");
        }

        let statement = Query::update()
            .table(Recipe::Table)
            .values([
                (Recipe::Name, name.to_owned().into()),
                (Recipe::Markup, input.markup.into()),
            ])
            .and_where(Expr::col(Recipe::Id).eq(&id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            pantry_shared::not_found!("recipe {id}");
        }

        tracing::info!(recipe = %id, "recipe updated");

        Ok(())
    }

    /// Removes the recipe. Plan days it was assigned to are kept with no
    /// recipe, so their plans lose its ingredients on the next view.
    pub async fn delete_recipe(&self, id: impl Into<String>) -> pantry_shared::Result<()> {
        let id = id.into();
        let mut tx = self.write_db.begin().await?;

        let statement = Query::update()
            .table(MealPlanDay::Table)
            .value(MealPlanDay::RecipeId, Option::<String>::None)
            .and_where(Expr::col(MealPlanDay::RecipeId).eq(&id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let unassigned = sqlx::query_with(&sql, values)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let statement = Query::delete()
            .from_table(Recipe::Table)
            .and_where(Expr::col(Recipe::Id).eq(&id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        if result.rows_affected() == 0 {
            pantry_shared::not_found!("recipe {id}");
        }

        tx.commit().await?;

        tracing::info!(recipe = %id, days = unassigned, "recipe deleted");

        Ok(())
    }

    /// Stores a plan with one row per weekday; days missing from the input
    /// have no recipe assigned.
    pub async fn save_plan(&self, input: SavePlanInput) -> pantry_shared::Result<String> {
        let name = input.name.trim();
        if name.is_empty() {
            pantry_shared::user!("meal plan name is required");
        }

        let mut assigned = HashMap::new();
        for day in input.days {
            if assigned.insert(day.day, day.recipe_id).is_some() {
                pantry_shared::user!("{} is assigned more than once", day.day);
            }
        }

        let recipe_ids = assigned
            .values()
            .flatten()
            .cloned()
            .collect::<HashSet<_>>();

        if !recipe_ids.is_empty() {
            let statement = Query::select()
                .column(Recipe::Id)
                .from(Recipe::Table)
                .and_where(Expr::col(Recipe::Id).is_in(recipe_ids.iter().cloned()))
                .to_owned();

            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            let found = sqlx::query_as_with::<_, (String,), _>(&sql, values)
                .fetch_all(&self.read_db)
                .await?
                .into_iter()
                .map(|(id,)| id)
                .collect::<HashSet<_>>();

            if let Some(missing) = recipe_ids.difference(&found).next() {
                pantry_shared::not_found!("recipe {missing}");
            }
        }

        let id = Ulid::new().to_string();
        let mut tx = self.write_db.begin().await?;

        let statement = Query::insert()
            .into_table(MealPlan::Table)
            .columns([MealPlan::Id, MealPlan::Name, MealPlan::CreatedAt])
            .values_panic([
                id.to_owned().into(),
                name.to_owned().into(),
                OffsetDateTime::now_utc().unix_timestamp().into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        let mut statement = Query::insert()
            .into_table(MealPlanDay::Table)
            .columns([
                MealPlanDay::PlanId,
                MealPlanDay::Position,
                MealPlanDay::Day,
                MealPlanDay::RecipeId,
            ])
            .to_owned();

        for day in Weekday::VARIANTS {
            let recipe_id = assigned.get(day).cloned().flatten();
            statement.values_panic([
                id.to_owned().into(),
                i64::from(day.position()).into(),
                day.to_string().into(),
                recipe_id.into(),
            ]);
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        tx.commit().await?;

        tracing::info!(plan = %id, recipes = recipe_ids.len(), "meal plan saved");

        Ok(id)
    }

    /// Removes the plan together with everything keyed by it.
    pub async fn delete_plan(&self, id: impl Into<String>) -> pantry_shared::Result<()> {
        let id = id.into();
        let mut tx = self.write_db.begin().await?;

        let statements = [
            Query::delete()
                .from_table(ShoppingList::Table)
                .and_where(Expr::col(ShoppingList::PlanId).eq(&id))
                .to_owned(),
            Query::delete()
                .from_table(PlanExclusion::Table)
                .and_where(Expr::col(PlanExclusion::PlanId).eq(&id))
                .to_owned(),
            Query::delete()
                .from_table(MealPlanDay::Table)
                .and_where(Expr::col(MealPlanDay::PlanId).eq(&id))
                .to_owned(),
        ];

        for statement in statements {
            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            sqlx::query_with(&sql, values).execute(&mut *tx).await?;
        }

        let statement = Query::delete()
            .from_table(MealPlan::Table)
            .and_where(Expr::col(MealPlan::Id).eq(&id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        if result.rows_affected() == 0 {
            pantry_shared::not_found!("meal plan {id}");
        }

        tx.commit().await?;

        tracing::info!(plan = %id, "meal plan deleted");

        Ok(())
    }
}
