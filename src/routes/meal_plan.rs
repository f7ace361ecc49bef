use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use pantry_mealplan::{MealPlanRow, SavePlanInput};
use pantry_shared::mealplan::{PlanDay, Weekday};
use serde::Serialize;
use serde_json::json;

use crate::{error::AppError, routes::AppState};

#[derive(Serialize)]
pub struct PlanSummary {
    pub id: String,
    pub name: String,
    pub created_at: i64,
}

impl From<MealPlanRow> for PlanSummary {
    fn from(row: MealPlanRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            created_at: row.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct AssignedRecipe {
    pub id: String,
    pub name: String,
}

#[derive(Serialize)]
pub struct Day {
    pub day: Weekday,
    pub position: u8,
    pub recipe: Option<AssignedRecipe>,
}

impl From<PlanDay> for Day {
    fn from(day: PlanDay) -> Self {
        Self {
            day: day.day,
            position: day.position,
            recipe: day.recipe.map(|recipe| AssignedRecipe {
                id: recipe.id,
                name: recipe.name,
            }),
        }
    }
}

#[derive(Serialize)]
pub struct PlanDetail {
    #[serde(flatten)]
    pub plan: PlanSummary,
    pub days: Vec<Day>,
}

/// GET /meal-plans
pub async fn index(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let plans = pantry_mealplan::Query(state.pool.clone())
        .list_plans()
        .await?
        .into_iter()
        .map(PlanSummary::from)
        .collect::<Vec<_>>();

    Ok(Json(plans))
}

/// POST /meal-plans
pub async fn create(
    State(state): State<AppState>,
    input: Result<Json<SavePlanInput>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(input) = input?;
    let id = state.mealplan_command.save_plan(input).await?;

    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}

/// GET /meal-plans/{id}
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let query = pantry_mealplan::Query(state.pool.clone());
    let Some(plan) = query.find_plan(&id).await? else {
        return Err(AppError::NotFound(format!("meal plan {id} not found")));
    };

    let days = query.plan_days(&id).await?;

    Ok(Json(PlanDetail {
        plan: plan.into(),
        days: days.into_iter().map(Day::from).collect(),
    }))
}

/// DELETE /meal-plans/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.mealplan_command.delete_plan(id).await?;

    Ok(Json(json!({ "success": true })))
}
