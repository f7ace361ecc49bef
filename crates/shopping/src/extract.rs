use scraper::{ElementRef, Html};
use std::collections::HashSet;

const HEADING_TAGS: &[&str] = &["h1", "h2", "h3", "h4", "h5", "h6", "p", "strong", "b"];
const LIST_TAGS: &[&str] = &["ul", "ol"];
const HEADING_KEYWORD: &str = "ingredient";

/// Recipe markup parsed into a tree. Parsing is lenient: unbalanced or
/// unknown tags never fail, they only change the shape of the tree.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_fragment(markup),
        }
    }

    /// Every element, in document order.
    fn elements(&self) -> Vec<ElementRef<'_>> {
        self.html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .collect()
    }
}

/// One way of locating ingredient lines inside a recipe document.
pub trait Strategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn extract(&self, document: &Document) -> Vec<String>;
}

/// Lists that follow a heading (or bold/paragraph label) mentioning ingredients.
pub struct IngredientHeading;

impl Strategy for IngredientHeading {
    fn name(&self) -> &'static str {
        "ingredient-heading"
    }

    fn extract(&self, document: &Document) -> Vec<String> {
        let elements = document.elements();
        let mut lines = Lines::default();

        for (index, element) in elements.iter().enumerate() {
            if !has_tag(element, HEADING_TAGS) || !mentions_ingredients(element) {
                continue;
            }

            let Some(list) = elements[index + 1..]
                .iter()
                .find(|next| has_tag(next, LIST_TAGS))
            else {
                continue;
            };

            lines.extend(list_items(*list));
        }

        lines.into_vec()
    }
}

/// Every item of every list in the document.
pub struct AnyList;

impl Strategy for AnyList {
    fn name(&self) -> &'static str {
        "any-list"
    }

    fn extract(&self, document: &Document) -> Vec<String> {
        let mut lines = Lines::default();

        for list in document
            .elements()
            .into_iter()
            .filter(|element| has_tag(element, LIST_TAGS))
        {
            lines.extend(list_items(list));
        }

        lines.into_vec()
    }
}

/// Runs strategies in order; the first one producing lines wins.
pub struct Extractor {
    strategies: Vec<Box<dyn Strategy>>,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(vec![Box::new(IngredientHeading), Box::new(AnyList)])
    }
}

impl Extractor {
    pub fn new(strategies: Vec<Box<dyn Strategy>>) -> Self {
        Self { strategies }
    }

    pub fn extract(&self, markup: &str) -> Vec<String> {
        if markup.trim().is_empty() {
            return Vec::new();
        }

        let document = Document::parse(markup);

        for strategy in &self.strategies {
            let lines = strategy.extract(&document);
            if lines.is_empty() {
                continue;
            }

            tracing::debug!(
                strategy = strategy.name(),
                lines = lines.len(),
                "ingredient lines extracted"
            );

            return lines;
        }

        Vec::new()
    }
}

/// Extracts raw ingredient lines from recipe markup with the default strategies.
pub fn extract(markup: &str) -> Vec<String> {
    Extractor::default().extract(markup)
}

/// Ordered lines without duplicates.
#[derive(Default)]
struct Lines {
    seen: HashSet<String>,
    lines: Vec<String>,
}

impl Lines {
    fn extend(&mut self, lines: impl IntoIterator<Item = String>) {
        for line in lines {
            if self.seen.insert(line.clone()) {
                self.lines.push(line);
            }
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.lines
    }
}

fn has_tag(element: &ElementRef<'_>, tags: &[&str]) -> bool {
    tags.contains(&element.value().name())
}

fn mentions_ingredients(element: &ElementRef<'_>) -> bool {
    element
        .text()
        .collect::<String>()
        .to_lowercase()
        .contains(HEADING_KEYWORD)
}

fn list_items(list: ElementRef<'_>) -> Vec<String> {
    list.descendants()
        .filter_map(ElementRef::wrap)
        .filter(|element| element.value().name() == "li")
        .map(|item| text_of(&item))
        .filter(|text| !text.is_empty())
        .collect()
}

fn text_of(element: &ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
