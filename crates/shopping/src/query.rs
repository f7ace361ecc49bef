use pantry_db::table::{PlanExclusion, ShoppingList};
use sea_query::{Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::prelude::FromRow;

use crate::ExclusionSet;

/// Text stored by the last shopping list view of a plan.
#[derive(Debug, FromRow)]
pub struct ShoppingListRecord {
    pub plan_id: String,
    pub created_at: i64,
    pub ingredients: String,
}

#[derive(Clone)]
pub struct Query(pub sqlx::SqlitePool);

impl Query {
    pub async fn exclusions(&self, plan_id: impl Into<String>) -> pantry_shared::Result<ExclusionSet> {
        let plan_id = plan_id.into();
        let statement = sea_query::Query::select()
            .column(PlanExclusion::Name)
            .from(PlanExclusion::Table)
            .and_where(Expr::col(PlanExclusion::PlanId).eq(&plan_id))
            .order_by(PlanExclusion::Name, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let names = sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        Ok(names.into_iter().map(|(name,)| name).collect())
    }

    pub async fn find_record(
        &self,
        plan_id: impl Into<String>,
    ) -> pantry_shared::Result<Option<ShoppingListRecord>> {
        let plan_id = plan_id.into();
        let statement = sea_query::Query::select()
            .columns([
                ShoppingList::PlanId,
                ShoppingList::CreatedAt,
                ShoppingList::Ingredients,
            ])
            .from(ShoppingList::Table)
            .and_where(Expr::col(ShoppingList::PlanId).eq(&plan_id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, ShoppingListRecord, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?)
    }
}
