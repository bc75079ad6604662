use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FormError;

/// News category a user can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Politics,
    Business,
    Technology,
    Health,
    Sports,
    Environment,
    Science,
    ArtsAndEntertainment,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Politics,
        Category::Business,
        Category::Technology,
        Category::Health,
        Category::Sports,
        Category::Environment,
        Category::Science,
        Category::ArtsAndEntertainment,
    ];

    /// Wire tag, e.g. `arts_and_entertainment`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Politics => "politics",
            Category::Business => "business",
            Category::Technology => "technology",
            Category::Health => "health",
            Category::Sports => "sports",
            Category::Environment => "environment",
            Category::Science => "science",
            Category::ArtsAndEntertainment => "arts_and_entertainment",
        }
    }

    /// Human readable label for checkbox lists.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Politics => "Politics",
            Category::Business => "Business",
            Category::Technology => "Technology",
            Category::Health => "Health",
            Category::Sports => "Sports",
            Category::Environment => "Environment",
            Category::Science => "Science",
            Category::ArtsAndEntertainment => "Arts and Entertainment",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = FormError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == tag)
            .ok_or_else(|| FormError::InvalidCategory(tag.to_string()))
    }
}

/// Selected categories, kept in first-selection order without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Category>", into = "Vec<Category>")]
pub struct CategorySet(Vec<Category>);

impl CategorySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the category if absent, removes it if present.
    /// Returns whether the category is selected afterwards.
    pub fn toggle(&mut self, category: Category) -> bool {
        match self.0.iter().position(|selected| *selected == category) {
            Some(index) => {
                self.0.remove(index);
                false
            }
            None => {
                self.0.push(category);
                true
            }
        }
    }

    pub fn contains(&self, category: Category) -> bool {
        self.0.contains(&category)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Category> {
        self.0.iter()
    }
}

impl From<Vec<Category>> for CategorySet {
    fn from(categories: Vec<Category>) -> Self {
        categories.into_iter().collect()
    }
}

impl From<CategorySet> for Vec<Category> {
    fn from(set: CategorySet) -> Self {
        set.0
    }
}

impl FromIterator<Category> for CategorySet {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        let mut selected = Vec::new();
        for category in iter {
            if !selected.contains(&category) {
                selected.push(category);
            }
        }
        CategorySet(selected)
    }
}

impl<'a> IntoIterator for &'a CategorySet {
    type Item = &'a Category;
    type IntoIter = std::slice::Iter<'a, Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
