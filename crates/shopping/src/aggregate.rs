use pantry_shared::mealplan::{PlanDay, Weekday};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};

use crate::{ExclusionSet, Extractor, normalize};

/// Raw lines of one assigned recipe, as written in its markup.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RecipeIngredients {
    pub recipe_name: String,
    pub day: Weekday,
    pub lines: Vec<String>,
}

/// A canonical ingredient and the number of distinct recipes using it.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct IngredientCount {
    pub name: String,
    pub count: usize,
}

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct Aggregation {
    /// One group per plan day whose recipe produced lines. Never filtered.
    pub by_recipe: Vec<RecipeIngredients>,
    /// Sorted by name, exclusions removed.
    pub items: Vec<IngredientCount>,
}

pub fn aggregate(days: &[PlanDay], exclusions: &ExclusionSet) -> Aggregation {
    aggregate_with(&Extractor::default(), days, exclusions)
}

pub fn aggregate_with(
    extractor: &Extractor,
    days: &[PlanDay],
    exclusions: &ExclusionSet,
) -> Aggregation {
    let mut days = days.iter().collect::<Vec<_>>();
    days.sort_by_key(|day| day.position);

    let mut extracted: HashMap<&str, Vec<String>> = HashMap::new();
    let mut tally: BTreeMap<String, HashSet<&str>> = BTreeMap::new();
    let mut by_recipe = Vec::new();

    for day in days {
        let Some(recipe) = &day.recipe else {
            continue;
        };

        let lines = extracted
            .entry(recipe.id.as_str())
            .or_insert_with(|| extractor.extract(&recipe.markup));

        if lines.is_empty() {
            tracing::debug!(recipe = %recipe.id, day = %day.day, "no ingredient lines found");
            continue;
        }

        for line in lines.iter() {
            let name = normalize(line);
            if name.is_empty() {
                continue;
            }

            tally.entry(name).or_default().insert(recipe.id.as_str());
        }

        by_recipe.push(RecipeIngredients {
            recipe_name: recipe.name.to_owned(),
            day: day.day,
            lines: lines.clone(),
        });
    }

    let items = tally
        .into_iter()
        .filter(|(name, _)| !exclusions.contains(name))
        .map(|(name, recipes)| IngredientCount {
            name,
            count: recipes.len(),
        })
        .collect::<Vec<_>>();

    Aggregation { by_recipe, items }
}
