use strum::{AsRefStr, Display};

#[derive(Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnitKind {
    Volume,
    Mass,
    LiquidMetric,
    CountOrSize,
}

/// One unit of measure and every spelling accepted for it.
#[derive(Debug, PartialEq)]
pub struct Unit {
    pub kind: UnitKind,
    pub spellings: &'static [&'static str],
}

/// Closed vocabulary of unit tokens stripped after a leading quantity.
pub static UNITS: &[Unit] = &[
    Unit {
        kind: UnitKind::Volume,
        spellings: &["cup", "cups"],
    },
    Unit {
        kind: UnitKind::Volume,
        spellings: &["tbsp", "tablespoon", "tablespoons"],
    },
    Unit {
        kind: UnitKind::Volume,
        spellings: &["tsp", "teaspoon", "teaspoons"],
    },
    Unit {
        kind: UnitKind::Mass,
        spellings: &["oz", "ounce", "ounces"],
    },
    Unit {
        kind: UnitKind::Mass,
        spellings: &["lb", "lbs", "pound", "pounds"],
    },
    Unit {
        kind: UnitKind::Mass,
        spellings: &["g", "gram", "grams"],
    },
    Unit {
        kind: UnitKind::Mass,
        spellings: &["kg", "kilogram", "kilograms"],
    },
    Unit {
        kind: UnitKind::LiquidMetric,
        spellings: &["ml", "milliliter", "milliliters"],
    },
    Unit {
        kind: UnitKind::LiquidMetric,
        spellings: &["l", "liter", "liters"],
    },
    Unit {
        kind: UnitKind::LiquidMetric,
        spellings: &["pt", "pint", "pints"],
    },
    Unit {
        kind: UnitKind::LiquidMetric,
        spellings: &["qt", "quart", "quarts"],
    },
    Unit {
        kind: UnitKind::LiquidMetric,
        spellings: &["gal", "gallon", "gallons"],
    },
    Unit {
        kind: UnitKind::CountOrSize,
        spellings: &["piece", "pieces"],
    },
    Unit {
        kind: UnitKind::CountOrSize,
        spellings: &["clove", "cloves"],
    },
    Unit {
        kind: UnitKind::CountOrSize,
        spellings: &["can", "cans"],
    },
    Unit {
        kind: UnitKind::CountOrSize,
        spellings: &["package", "packages", "pkg"],
    },
    Unit {
        kind: UnitKind::CountOrSize,
        spellings: &["slice", "slices"],
    },
    Unit {
        kind: UnitKind::CountOrSize,
        spellings: &["medium"],
    },
    Unit {
        kind: UnitKind::CountOrSize,
        spellings: &["large"],
    },
    Unit {
        kind: UnitKind::CountOrSize,
        spellings: &["small"],
    },
    Unit {
        kind: UnitKind::CountOrSize,
        spellings: &["whole"],
    },
];

/// Unicode vulgar fractions accepted as quantities.
pub static FRACTION_GLYPHS: &[char] = &['½', '¼', '¾', '⅓', '⅔', '⅛', '⅜', '⅝', '⅞'];

/// Every spelling in [`UNITS`], longest first so that alternations built from
/// it never stop at a shorter prefix ("l" before "lbs").
pub fn spellings() -> Vec<&'static str> {
    let mut spellings = UNITS
        .iter()
        .flat_map(|unit| unit.spellings.iter().copied())
        .collect::<Vec<_>>();

    spellings.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    spellings.dedup();
    spellings
}

/// Case-insensitive lookup of a unit token.
pub fn lookup(token: &str) -> Option<&'static Unit> {
    let token = token.to_lowercase();

    UNITS
        .iter()
        .find(|unit| unit.spellings.iter().any(|s| *s == token))
}
