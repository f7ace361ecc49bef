use crate::IngredientCount;

impl IngredientCount {
    /// `"Flour (in 3 recipes)"`, or just the name when a single recipe uses it.
    pub fn label(&self) -> String {
        if self.count > 1 {
            format!("{} (in {} recipes)", self.name, self.count)
        } else {
            self.name.to_owned()
        }
    }
}

/// Newline separated labels, without a trailing newline.
pub fn format(items: &[IngredientCount]) -> String {
    items
        .iter()
        .map(IngredientCount::label)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, count: usize) -> IngredientCount {
        IngredientCount {
            name: name.to_owned(),
            count,
        }
    }

    #[test]
    fn test_label() {
        assert_eq!(item("Flour", 3).label(), "Flour (in 3 recipes)");
        assert_eq!(item("Eggs", 2).label(), "Eggs (in 2 recipes)");
        assert_eq!(item("Salt", 1).label(), "Salt");
    }

    #[test]
    fn test_format() {
        let items = vec![item("Eggs", 1), item("Flour", 3), item("Salt", 2)];
        assert_eq!(
            format(&items),
            "Eggs\nFlour (in 3 recipes)\nSalt (in 2 recipes)"
        );
    }

    #[test]
    fn test_format_empty_and_single() {
        assert_eq!(format(&[]), "");
        assert_eq!(format(&[item("Milk", 1)]), "Milk");
    }
}
