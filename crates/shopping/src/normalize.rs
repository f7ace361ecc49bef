use regex::Regex;
use std::sync::LazyLock;

use crate::unit::{self, FRACTION_GLYPHS, Unit};

static RE_LEADING_QUANTITY: LazyLock<Regex> = LazyLock::new(|| {
    let glyphs = FRACTION_GLYPHS.iter().collect::<String>();
    let amount = format!(r"(?:[0-9]+\s*/\s*[0-9]+|[0-9]*\.[0-9]+|[0-9]+|[{glyphs}])");
    let units = unit::spellings()
        .into_iter()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|");

    Regex::new(&format!(
        r"(?i)^\s*(?P<amount>{amount}(?:\s*{amount})*)\s*(?:(?P<unit>{units})\b\.?)?\s*"
    ))
    .unwrap()
});

static RE_PARENTHETICAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\([^()]*\)").unwrap());

/// Quantity and unit found at the start of an ingredient line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeadingQuantity<'a> {
    pub amount: &'a str,
    pub unit: Option<&'static Unit>,
}

/// Splits the leading quantity run (and its unit, if any) off `line`.
///
/// Only the first run is considered: `"2 cups flour, 1 egg"` yields
/// `"flour, 1 egg"` as the remainder.
pub fn split_quantity(line: &str) -> (Option<LeadingQuantity<'_>>, &str) {
    let Some(captures) = RE_LEADING_QUANTITY.captures(line) else {
        return (None, line);
    };

    let (Some(whole), Some(amount)) = (captures.get(0), captures.name("amount")) else {
        return (None, line);
    };

    let quantity = LeadingQuantity {
        amount: amount.as_str().trim(),
        unit: captures
            .name("unit")
            .and_then(|unit| unit::lookup(unit.as_str())),
    };

    (Some(quantity), &line[whole.end()..])
}

fn strip_parentheticals(text: &str) -> String {
    let mut text = text.to_owned();

    // innermost spans first so nested notes disappear entirely
    while RE_PARENTHETICAL.is_match(&text) {
        text = RE_PARENTHETICAL.replace_all(&text, "").into_owned();
    }

    text
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn normalize_once(line: &str) -> String {
    let (_, rest) = split_quantity(line);
    let text = strip_parentheticals(rest);
    let text = text.trim().trim_end_matches(',').trim();

    capitalize(text)
}

/// Turns a raw ingredient line into its canonical display name.
///
/// `"2 cups flour (sifted)"` becomes `"Flour"`. Lines without a leading
/// quantity only lose their parenthetical notes and surrounding whitespace.
/// The result is stable: normalizing a canonical name returns it unchanged.
pub fn normalize(line: &str) -> String {
    let mut current = normalize_once(line);

    // cleanup can expose another leading quantity ("(1) 2 eggs"), keep going until stable
    loop {
        let next = normalize_once(&current);
        if next == current {
            return current;
        }

        current = next;
    }
}
