mod plan_exclusion;
mod shopping_list;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "pantry",
    "m0_2",
    vec_box![crate::m0_1::Migration],
    vec_box![plan_exclusion::CreateTable, shopping_list::CreateTable]
);
