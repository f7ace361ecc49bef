use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::IntoResponse,
};
use pantry_shared::mealplan::Weekday;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{error::AppError, routes::AppState};

#[derive(Serialize)]
pub struct RecipeGroup {
    pub recipe_name: String,
    pub day: Weekday,
    pub ingredients: Vec<String>,
}

#[derive(Serialize)]
pub struct Item {
    pub name: String,
    pub count: usize,
    pub label: String,
}

#[derive(Serialize)]
pub struct ShoppingListResponse {
    pub plan_id: String,
    pub by_recipe: Vec<RecipeGroup>,
    pub items: Vec<Item>,
    pub text: String,
}

impl From<pantry_shopping::ShoppingListView> for ShoppingListResponse {
    fn from(view: pantry_shopping::ShoppingListView) -> Self {
        Self {
            plan_id: view.plan_id,
            by_recipe: view
                .by_recipe
                .into_iter()
                .map(|group| RecipeGroup {
                    recipe_name: group.recipe_name,
                    day: group.day,
                    ingredients: group.lines,
                })
                .collect(),
            items: view
                .items
                .into_iter()
                .map(|item| Item {
                    label: item.label(),
                    name: item.name,
                    count: item.count,
                })
                .collect(),
            text: view.text,
        }
    }
}

/// GET /meal-plans/{id}/shopping-list
///
/// Recomputes the list and stores its text on every call.
pub async fn page(
    State(state): State<AppState>,
    Path(plan_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let view = state.shopping_command.view(plan_id).await?;

    Ok(Json(ShoppingListResponse::from(view)))
}

#[derive(Deserialize)]
pub struct ExcludeInput {
    pub remove_ingredients: Vec<String>,
}

/// POST /meal-plans/{id}/shopping-list/exclusions
pub async fn exclude(
    State(state): State<AppState>,
    Path(plan_id): Path<String>,
    input: Result<Json<ExcludeInput>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(input) = input?;
    state
        .shopping_command
        .exclude(plan_id, input.remove_ingredients)
        .await?;

    Ok(Json(json!({ "success": true })))
}

/// POST /meal-plans/{id}/shopping-list/exclusions/reset
pub async fn reset(
    State(state): State<AppState>,
    Path(plan_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.shopping_command.reset_exclusions(plan_id).await?;

    Ok(Json(json!({ "success": true })))
}
