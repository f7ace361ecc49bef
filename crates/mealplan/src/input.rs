use pantry_shared::mealplan::Weekday;
use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
pub struct CreateRecipeInput {
    pub name: String,
    #[serde(default)]
    pub markup: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct DayInput {
    pub day: Weekday,
    #[serde(default)]
    pub recipe_id: Option<String>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct SavePlanInput {
    pub name: String,
    #[serde(default)]
    pub days: Vec<DayInput>,
}

/// Replaces both fields of an existing recipe.
#[derive(Deserialize, Clone, Debug)]
pub struct UpdateRecipeInput {
    pub name: String,
    #[serde(default)]
    pub markup: String,
}
