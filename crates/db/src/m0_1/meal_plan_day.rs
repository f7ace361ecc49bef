use sea_query::{ColumnDef, Index, Table, TableCreateStatement, TableDropStatement};

use crate::table::MealPlanDay;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(MealPlanDay::Table)
        .col(
            ColumnDef::new(MealPlanDay::PlanId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(ColumnDef::new(MealPlanDay::Position).integer().not_null())
        .col(
            ColumnDef::new(MealPlanDay::Day)
                .string()
                .not_null()
                .string_len(9),
        )
        .col(
            ColumnDef::new(MealPlanDay::RecipeId)
                .string()
                .null()
                .string_len(26),
        )
        .primary_key(
            Index::create()
                .col(MealPlanDay::PlanId)
                .col(MealPlanDay::Position),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(MealPlanDay::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
