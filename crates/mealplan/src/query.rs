use pantry_db::table::{MealPlan, MealPlanDay, Recipe as RecipeTable};
use pantry_shared::mealplan::{PlanDay, Recipe, Weekday};
use sea_query::{Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::prelude::FromRow;
use std::collections::HashMap;

#[derive(Default, FromRow)]
pub struct MealPlanRow {
    pub id: String,
    pub name: String,
    pub created_at: i64,
}

#[derive(FromRow)]
pub struct RecipeRow {
    pub id: String,
    pub name: String,
    pub markup: String,
}

impl From<RecipeRow> for Recipe {
    fn from(row: RecipeRow) -> Self {
        Recipe {
            id: row.id,
            name: row.name,
            markup: row.markup,
        }
    }
}

#[derive(FromRow)]
pub struct MealPlanDayRow {
    pub position: i64,
    pub day: sqlx::types::Text<Weekday>,
    pub recipe_id: Option<String>,
}

#[derive(Clone)]
pub struct Query(pub sqlx::SqlitePool);

impl Query {
    /// Saved plans, newest first.
    pub async fn list_plans(&self) -> pantry_shared::Result<Vec<MealPlanRow>> {
        let statement = sea_query::Query::select()
            .columns([MealPlan::Id, MealPlan::Name, MealPlan::CreatedAt])
            .from(MealPlan::Table)
            .order_by(MealPlan::CreatedAt, Order::Desc)
            .order_by_expr(Expr::cust("rowid"), Order::Desc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, MealPlanRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }

    /// Every recipe ordered by name.
    pub async fn list_recipes(&self) -> pantry_shared::Result<Vec<Recipe>> {
        self.search_recipes("").await
    }

    /// Recipes whose name contains `term`, ordered by name. A blank term
    /// matches every recipe.
    pub async fn search_recipes(&self, term: impl AsRef<str>) -> pantry_shared::Result<Vec<Recipe>> {
        let term = term.as_ref().trim();
        let mut statement = sea_query::Query::select()
            .columns([RecipeTable::Id, RecipeTable::Name, RecipeTable::Markup])
            .from(RecipeTable::Table)
            .order_by(RecipeTable::Name, Order::Asc)
            .order_by(RecipeTable::Id, Order::Asc)
            .to_owned();

        if !term.is_empty() {
            // SQLite LIKE is case-insensitive for ASCII
            statement.and_where(Expr::col(RecipeTable::Name).like(format!("%{term}%")));
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn find_plan(
        &self,
        id: impl Into<String>,
    ) -> pantry_shared::Result<Option<MealPlanRow>> {
        let id = id.into();
        let statement = sea_query::Query::select()
            .columns([MealPlan::Id, MealPlan::Name, MealPlan::CreatedAt])
            .from(MealPlan::Table)
            .and_where(Expr::col(MealPlan::Id).eq(&id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, MealPlanRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?)
    }

    pub async fn find_recipe(&self, id: impl Into<String>) -> pantry_shared::Result<Option<Recipe>> {
        let id = id.into();
        let statement = sea_query::Query::select()
            .columns([RecipeTable::Id, RecipeTable::Name, RecipeTable::Markup])
            .from(RecipeTable::Table)
            .and_where(Expr::col(RecipeTable::Id).eq(&id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?;

        Ok(row.map(Into::into))
    }

    /// Days of the plan ordered by position, each with its recipe loaded.
    pub async fn plan_days(&self, id: impl Into<String>) -> pantry_shared::Result<Vec<PlanDay>> {
        let id = id.into();
        if self.find_plan(&id).await?.is_none() {
            pantry_shared::not_found!("meal plan {id}");
        }

        let statement = sea_query::Query::select()
            .columns([
                MealPlanDay::Position,
                MealPlanDay::Day,
                MealPlanDay::RecipeId,
            ])
            .from(MealPlanDay::Table)
            .and_where(Expr::col(MealPlanDay::PlanId).eq(&id))
            .order_by(MealPlanDay::Position, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, MealPlanDayRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        let recipe_ids = rows
            .iter()
            .filter_map(|row| row.recipe_id.to_owned())
            .collect::<Vec<_>>();

        let mut recipes = HashMap::new();
        if !recipe_ids.is_empty() {
            let statement = sea_query::Query::select()
                .columns([RecipeTable::Id, RecipeTable::Name, RecipeTable::Markup])
                .from(RecipeTable::Table)
                .and_where(Expr::col(RecipeTable::Id).is_in(recipe_ids))
                .to_owned();

            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            for row in sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
                .fetch_all(&self.0)
                .await?
            {
                recipes.insert(row.id.to_owned(), Recipe::from(row));
            }
        }

        let mut days = Vec::with_capacity(rows.len());
        for row in rows {
            let day = row.day.0;
            let position = u8::try_from(row.position)
                .ok()
                .filter(|position| Weekday::from_position(*position) == Some(day));

            let Some(position) = position else {
                pantry_shared::bail!(
                    "meal plan {id} stores {day} at position {}",
                    row.position
                );
            };

            days.push(PlanDay {
                day,
                position,
                recipe: row.recipe_id.and_then(|id| recipes.get(&id).cloned()),
            });
        }

        Ok(days)
    }
}
