//! Derived views over an already-fetched recipe collection: the browsable
//! category list and the search/filter predicates. Pure functions, no store
//! access.

use crate::store::Recipe;

/// Distinct non-empty categories, in first-seen order.
pub fn derive_categories(recipes: &[Recipe]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for recipe in recipes {
        let category = recipe.category.trim();
        if category.is_empty() {
            continue;
        }
        if !categories.iter().any(|existing| existing == category) {
            categories.push(category.to_string());
        }
    }
    categories
}

/// A recipe matches when `query` is a case-insensitive substring of its name
/// or description, and `category` is empty or equals its category exactly.
/// Both predicates must hold; an empty query matches everything.
pub fn filter_recipes<'a>(recipes: &'a [Recipe], query: &str, category: &str) -> Vec<&'a Recipe> {
    let query = query.to_lowercase();
    recipes
        .iter()
        .filter(|recipe| {
            let matches_query = query.is_empty()
                || recipe.name.to_lowercase().contains(&query)
                || recipe.description.to_lowercase().contains(&query);
            let matches_category = category.is_empty() || recipe.category == category;
            matches_query && matches_category
        })
        .collect()
}

/// One ingredient per line; blank lines are discarded.
pub fn ingredient_lines(ingredients: &str) -> Vec<&str> {
    ingredients
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn recipe(name: &str, description: &str, category: &str) -> Recipe {
        Recipe {
            id: "1".to_string(),
            name: name.to_string(),
            description: description.to_string(),
            image_url: String::new(),
            recipe: String::new(),
            ingredients: String::new(),
            cooking_time: String::new(),
            difficulty: String::new(),
            servings: String::new(),
            category: category.to_string(),
            tiktok_url: String::new(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn categories_are_distinct_and_skip_empties() {
        let recipes = vec![
            recipe("a", "", "Dezerty"),
            recipe("b", "", ""),
            recipe("c", "", "Dezerty"),
            recipe("d", "", "Polievky"),
        ];
        assert_eq!(derive_categories(&recipes), vec!["Dezerty", "Polievky"]);
    }

    #[test]
    fn query_matches_name_or_description_case_insensitively() {
        let recipes = vec![
            recipe("Pizza Margherita", "", ""),
            recipe("César šalát", "", ""),
            recipe("Focaccia", "Takmer ako pizza, ale bez syra", ""),
        ];
        let matched = filter_recipes(&recipes, "pizza", "");
        let names: Vec<&str> = matched.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Pizza Margherita", "Focaccia"]);
    }

    #[test]
    fn empty_query_matches_everything() {
        let recipes = vec![recipe("a", "", ""), recipe("b", "", "")];
        assert_eq!(filter_recipes(&recipes, "", "").len(), 2);
    }

    #[test]
    fn category_must_match_exactly() {
        let recipes = vec![
            recipe("Kapustnica", "", "Polievky"),
            recipe("Šošovicová", "", "polievky"),
        ];
        let matched = filter_recipes(&recipes, "", "Polievky");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Kapustnica");
    }

    #[test]
    fn both_predicates_must_hold() {
        let recipes = vec![
            recipe("Pizza Margherita", "", "Hlavné jedlá"),
            recipe("Pizza dezertná", "", "Dezerty"),
        ];
        let matched = filter_recipes(&recipes, "pizza", "Dezerty");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Pizza dezertná");
    }

    #[test]
    fn ingredient_lines_drop_blanks() {
        let lines = ingredient_lines("400g špagiet\n\n  \n200g slaniny\n4 vajcia\n");
        assert_eq!(lines, vec!["400g špagiet", "200g slaniny", "4 vajcia"]);
    }
}
