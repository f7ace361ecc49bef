use axum::{
    Router,
    routing::{get, post},
};
use sqlx::SqlitePool;

mod health;
mod meal_plan;
mod recipes;
mod shopping_list;

#[derive(Clone)]
pub struct AppState {
    pub mealplan_command: pantry_mealplan::Command,
    pub shopping_command: pantry_shopping::Command,
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(state: pantry_shared::State) -> Self {
        Self {
            pool: state.read_db.clone(),
            mealplan_command: pantry_mealplan::Command::new(state.clone()),
            shopping_command: pantry_shopping::Command::new(state),
        }
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .merge(
            Router::new()
                .route("/recipes", get(recipes::index).post(recipes::create))
                .route(
                    "/recipes/{id}",
                    get(recipes::detail)
                        .put(recipes::update)
                        .delete(recipes::delete),
                )
                .route("/meal-plans", get(meal_plan::index).post(meal_plan::create))
                .route(
                    "/meal-plans/{id}",
                    get(meal_plan::detail).delete(meal_plan::delete),
                )
                .route("/meal-plans/{id}/shopping-list", get(shopping_list::page))
                .route(
                    "/meal-plans/{id}/shopping-list/exclusions",
                    post(shopping_list::exclude),
                )
                .route(
                    "/meal-plans/{id}/shopping-list/exclusions/reset",
                    post(shopping_list::reset),
                )
                .with_state(app_state),
        )
}
