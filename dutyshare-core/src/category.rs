//! Chore categories and difficulty bands.
//!
//! Categories form a closed set. Parsing never fails: anything the engine
//! does not recognise is filed under [`Category::Other`], which keeps the
//! scorer total even when upstream data drifts.
//!
//! # Examples
//! ```
//! use dutyshare_core::Category;
//!
//! assert_eq!(Category::Kitchen.as_str(), "kitchen");
//! assert_eq!(Category::parse_lossy(" Trash "), Category::Trash);
//! assert_eq!(Category::parse_lossy("gardening"), Category::Other);
//! ```

/// A kind of shared-living chore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum Category {
    /// Cleaning bathrooms and toilets.
    Washroom,
    /// Sweeping and mopping floors.
    Sweeping,
    /// Cooking areas and appliances.
    Kitchen,
    /// Taking out bins and recycling.
    Trash,
    /// Dusting shelves and surfaces.
    Dusting,
    /// Washing and folding shared linen.
    Laundry,
    /// Washing up.
    Dishes,
    /// Anything else, including unrecognised input.
    Other,
}

impl Category {
    /// Every category in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Washroom,
        Self::Sweeping,
        Self::Kitchen,
        Self::Trash,
        Self::Dusting,
        Self::Laundry,
        Self::Dishes,
        Self::Other,
    ];

    /// Return the category as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use dutyshare_core::Category;
    ///
    /// assert_eq!(Category::Dishes.as_str(), "dishes");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Washroom => "washroom",
            Self::Sweeping => "sweeping",
            Self::Kitchen => "kitchen",
            Self::Trash => "trash",
            Self::Dusting => "dusting",
            Self::Laundry => "laundry",
            Self::Dishes => "dishes",
            Self::Other => "other",
        }
    }

    /// Parse a category, falling back to [`Category::Other`].
    ///
    /// Matching ignores surrounding whitespace and ASCII case.
    #[must_use]
    pub fn parse_lossy(raw: &str) -> Self {
        let needle = raw.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(needle))
            .unwrap_or(Self::Other)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Category {
    fn from(raw: &str) -> Self {
        Self::parse_lossy(raw)
    }
}

impl From<String> for Category {
    fn from(raw: String) -> Self {
        Self::parse_lossy(&raw)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_owned()
    }
}

/// Coarse partition of the `1..=10` difficulty scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DifficultyBand {
    /// Difficulty of 3 or less.
    Easy,
    /// Difficulty between 4 and 6.
    Medium,
    /// Difficulty above 6.
    Hard,
}

impl DifficultyBand {
    /// Upper bound (inclusive) of the easy band.
    pub const EASY_MAX: u8 = 3;
    /// Upper bound (inclusive) of the medium band.
    pub const MEDIUM_MAX: u8 = 6;

    /// Classify a difficulty value.
    ///
    /// # Examples
    /// ```
    /// use dutyshare_core::DifficultyBand;
    ///
    /// assert_eq!(DifficultyBand::of(3), DifficultyBand::Easy);
    /// assert_eq!(DifficultyBand::of(4), DifficultyBand::Medium);
    /// assert_eq!(DifficultyBand::of(7), DifficultyBand::Hard);
    /// ```
    #[must_use]
    pub const fn of(difficulty: u8) -> Self {
        if difficulty <= Self::EASY_MAX {
            Self::Easy
        } else if difficulty <= Self::MEDIUM_MAX {
            Self::Medium
        } else {
            Self::Hard
        }
    }
}
