use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use pantry_mealplan::{CreateRecipeInput, UpdateRecipeInput};
use pantry_shared::mealplan::Recipe;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{error::AppError, routes::AppState};

#[derive(Deserialize, Debug, Default)]
pub struct SearchQuery {
    pub q: Option<String>,
}

#[derive(Serialize)]
pub struct RecipeSummary {
    pub id: String,
    pub name: String,
}

#[derive(Serialize)]
pub struct RecipeDetail {
    pub id: String,
    pub name: String,
    pub markup: String,
}

impl From<Recipe> for RecipeDetail {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name,
            markup: recipe.markup,
        }
    }
}

/// GET /recipes, GET /recipes?q=soup
pub async fn index(
    State(state): State<AppState>,
    Query(input): Query<SearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let query = pantry_mealplan::Query(state.pool.clone());
    let recipes = match input.q {
        Some(term) => query.search_recipes(term).await?,
        None => query.list_recipes().await?,
    };

    let recipes = recipes
        .into_iter()
        .map(|recipe| RecipeSummary {
            id: recipe.id,
            name: recipe.name,
        })
        .collect::<Vec<_>>();

    Ok(Json(recipes))
}

/// POST /recipes
pub async fn create(
    State(state): State<AppState>,
    input: Result<Json<CreateRecipeInput>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(input) = input?;
    let id = state.mealplan_command.create_recipe(input).await?;

    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

/// GET /recipes/{id}
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let Some(recipe) = pantry_mealplan::Query(state.pool.clone())
        .find_recipe(&id)
        .await?
    else {
        return Err(AppError::NotFound(format!("recipe {id} not found")));
    };

    Ok(Json(RecipeDetail::from(recipe)))
}

/// PUT /recipes/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    input: Result<Json<UpdateRecipeInput>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(input) = input?;
    state.mealplan_command.update_recipe(id, input).await?;

    Ok(Json(json!({ "success": true })))
}

/// DELETE /recipes/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.mealplan_command.delete_recipe(id).await?;

    Ok(Json(json!({ "success": true })))
}
