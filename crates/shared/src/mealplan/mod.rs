use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Ordinal position of the day inside a plan, Monday = 0.
    pub fn position(&self) -> u8 {
        match self {
            Weekday::Monday => 0,
            Weekday::Tuesday => 1,
            Weekday::Wednesday => 2,
            Weekday::Thursday => 3,
            Weekday::Friday => 4,
            Weekday::Saturday => 5,
            Weekday::Sunday => 6,
        }
    }

    pub fn from_position(position: u8) -> Option<Self> {
        Self::VARIANTS.get(position as usize).copied()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    /// Rich-text body as authored in the editor.
    pub markup: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlanDay {
    pub day: Weekday,
    pub position: u8,
    pub recipe: Option<Recipe>,
}

impl PlanDay {
    pub fn new(day: Weekday, recipe: Option<Recipe>) -> Self {
        Self {
            day,
            position: day.position(),
            recipe,
        }
    }
}
