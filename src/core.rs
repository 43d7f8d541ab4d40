//! Common type definitions used across the codebase.
//!
//! All records are deserialized once at the I/O boundary (see `io::input`);
//! the analysis modules assume well-formed input and never validate.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Calendar season, derived from the month of a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Fixed month mapping: 3-5 spring, 6-8 summer, 9-11 autumn, 12-2 winter.
    pub fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Autumn,
            _ => Season::Winter,
        }
    }

    pub fn for_date(date: NaiveDate) -> Self {
        Self::from_month(date.month())
    }

    /// The upcoming season, used by the "prepare next season" advisory.
    pub fn next(self) -> Self {
        match self {
            Season::Spring => Season::Summer,
            Season::Summer => Season::Autumn,
            Season::Autumn => Season::Winter,
            Season::Winter => Season::Spring,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Lifecycle status of a clothing item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClothingStatus {
    #[default]
    Active,
    Damaged,
    Idle,
    Discarded,
}

impl std::fmt::Display for ClothingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ClothingStatus::Active => "Active",
            ClothingStatus::Damaged => "Damaged",
            ClothingStatus::Idle => "Idle",
            ClothingStatus::Discarded => "Discarded",
        };
        write!(f, "{s}")
    }
}

/// A single clothing item, scoped to one wardrobe.
///
/// `use_count` only increases; `last_used_at`, when present, is the timestamp
/// of the most recent increment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClothingItem {
    pub id: String,
    pub name: String,
    pub category_id: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub seasons: Vec<Season>,
    #[serde(default)]
    pub status: ClothingStatus,
    #[serde(default)]
    pub use_count: u32,
    #[serde(default)]
    pub last_used_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl ClothingItem {
    pub fn is_worn(&self) -> bool {
        self.use_count > 0
    }

    pub fn suits(&self, season: Season) -> bool {
        self.seasons.contains(&season)
    }
}

/// A named collection of clothing items worn together.
///
/// Tracks its own use count independent of member items'. Member order is
/// preserved from the export; the relation analyzer relies on it for
/// deterministic first-observed tie-breaking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outfit {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub item_ids: Vec<String>,
    #[serde(default)]
    pub use_count: u32,
    #[serde(default)]
    pub last_used_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub seasons: Vec<Season>,
}

/// A category node in the two-level category tree.
///
/// `parent_id` is set only for level-2 categories; the tree is never deeper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub level: u8,
    #[serde(default)]
    pub parent_id: Option<String>,
}

/// Everything belonging to one wardrobe: the unit of analysis scope.
///
/// No cross-wardrobe aggregation happens anywhere in the crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WardrobeSnapshot {
    #[serde(default)]
    pub wardrobe_id: String,
    #[serde(default)]
    pub items: Vec<ClothingItem>,
    #[serde(default)]
    pub outfits: Vec<Outfit>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl WardrobeSnapshot {
    /// Category display name for an item, `"Uncategorized"` for dangling ids.
    pub fn category_name(&self, category_id: &str) -> &str {
        self.categories
            .iter()
            .find(|c| c.id == category_id)
            .map(|c| c.name.as_str())
            .unwrap_or("Uncategorized")
    }
}

/// Advisory priority levels, ordered ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        };
        write!(f, "{s}")
    }
}
