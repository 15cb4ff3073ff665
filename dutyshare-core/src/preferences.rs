//! Optional per-member category preferences.
//!
//! Preferences are a secondary nudge: they reorder otherwise comparable
//! chores but never override fairness.

use crate::Category;

/// Categories a member would rather take or rather skip.
///
/// # Examples
/// ```
/// use dutyshare_core::{Category, Preferences};
///
/// let preferences = Preferences::new()
///     .prefer(Category::Kitchen)
///     .avoid(Category::Washroom);
/// assert!(preferences.prefers(Category::Kitchen));
/// assert!(preferences.avoids(Category::Washroom));
/// assert!(!preferences.prefers(Category::Trash));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Preferences {
    /// Categories the member likes doing.
    #[cfg_attr(feature = "serde", serde(default))]
    pub preferred_categories: Vec<Category>,
    /// Categories the member would rather not do.
    #[cfg_attr(feature = "serde", serde(default))]
    pub avoided_categories: Vec<Category>,
}

impl Preferences {
    /// Construct an empty set of preferences.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a preferred category while returning `self` for chaining.
    ///
    /// Duplicates are ignored.
    #[must_use]
    pub fn prefer(mut self, category: Category) -> Self {
        if !self.preferred_categories.contains(&category) {
            self.preferred_categories.push(category);
        }
        self
    }

    /// Add an avoided category while returning `self` for chaining.
    ///
    /// Duplicates are ignored.
    #[must_use]
    pub fn avoid(mut self, category: Category) -> Self {
        if !self.avoided_categories.contains(&category) {
            self.avoided_categories.push(category);
        }
        self
    }

    /// Whether the member listed `category` as preferred.
    #[must_use]
    pub fn prefers(&self, category: Category) -> bool {
        self.preferred_categories.contains(&category)
    }

    /// Whether the member listed `category` as avoided.
    #[must_use]
    pub fn avoids(&self, category: Category) -> bool {
        self.avoided_categories.contains(&category)
    }

    /// Whether neither list holds anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.preferred_categories.is_empty() && self.avoided_categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_preferences_match_nothing() {
        let preferences = Preferences::new();
        assert!(preferences.is_empty());
        assert!(Category::ALL.iter().all(|&c| !preferences.prefers(c)));
        assert!(Category::ALL.iter().all(|&c| !preferences.avoids(c)));
    }

    #[test]
    fn builders_ignore_duplicates() {
        let preferences = Preferences::new()
            .prefer(Category::Dishes)
            .prefer(Category::Dishes)
            .avoid(Category::Trash)
            .avoid(Category::Trash);
        assert_eq!(preferences.preferred_categories, vec![Category::Dishes]);
        assert_eq!(preferences.avoided_categories, vec![Category::Trash]);
    }

    #[test]
    fn a_category_can_sit_in_both_lists() {
        let preferences = Preferences::new()
            .prefer(Category::Laundry)
            .avoid(Category::Laundry);
        assert!(preferences.prefers(Category::Laundry));
        assert!(preferences.avoids(Category::Laundry));
    }
}
