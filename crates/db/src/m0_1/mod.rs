mod meal_plan;
mod meal_plan_day;
mod recipe;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "pantry",
    "m0_1",
    vec_box![],
    vec_box![
        recipe::CreateTable,
        meal_plan::CreateTable,
        meal_plan_day::CreateTable
    ]
);
