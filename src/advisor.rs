//! Rule-based wardrobe advisories.
//!
//! This is the deterministic local engine: it inspects the statistics
//! snapshot and the raw records, evaluates each rule independently, and
//! returns prioritized messages. It never fails and needs no network; a
//! remote-model layer, if any, is the caller's concern and falls back to
//! these advisories on any failure.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::config::Thresholds;
use crate::core::{ClothingStatus, Priority, Season, WardrobeSnapshot};
use crate::stats::Statistics;

/// Share of idle items above which the wardrobe is flagged.
pub const IDLE_RATIO_THRESHOLD: f64 = 0.30;

/// Share of one category above which the wardrobe counts as imbalanced.
pub const CATEGORY_SHARE_THRESHOLD: f64 = 0.40;

/// Minimum number of outfits before the "create more outfits" advisory stops.
pub const MIN_OUTFITS: usize = 5;

/// Price above which an item counts as expensive.
pub const HIGH_PRICE_THRESHOLD: f64 = 500.0;

/// Use count below which an expensive item counts as low-ROI.
pub const LOW_USE_THRESHOLD: u32 = 3;

/// Minimum item count for the upcoming season.
pub const NEXT_SEASON_MIN_ITEMS: usize = 10;

/// Minimum number of distinct brands.
pub const MIN_DISTINCT_BRANDS: usize = 5;

/// Utilization rate (percent) below which the wardrobe is underused.
pub const MIN_UTILIZATION_RATE: f64 = 50.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    pub priority: Priority,
    pub title: String,
    pub message: String,
}

impl Advisory {
    fn new(priority: Priority, title: &str, message: String) -> Self {
        Self {
            priority,
            title: title.to_string(),
            message,
        }
    }
}

/// Evaluates every advisory rule against one wardrobe.
///
/// Rules fire independently; the result is sorted high priority first, and
/// within a tier advisories keep rule-evaluation order.
pub fn advise(
    snapshot: &WardrobeSnapshot,
    stats: &Statistics,
    today: NaiveDate,
    thresholds: &Thresholds,
) -> Vec<Advisory> {
    let mut advisories = Vec::new();
    let total = stats.total_clothings;

    if total > 0 {
        let idle_ratio = stats.idle_clothings.len() as f64 / total as f64;
        if idle_ratio > thresholds.idle_ratio {
            advisories.push(Advisory::new(
                Priority::High,
                "Too many idle items",
                format!(
                    "{} of {} items suited to the current season have gone unworn \
                     for a month or more. Plan outfits around them or let them go.",
                    stats.idle_clothings.len(),
                    total
                ),
            ));
        }
    }

    if let Some((name, count)) = dominant_category(stats) {
        if total > 0 && count as f64 / total as f64 > thresholds.category_share {
            advisories.push(Advisory::new(
                Priority::Medium,
                "Category imbalance",
                format!(
                    "{name} makes up {count} of {total} items. Filling out other \
                     categories will unlock more outfit combinations."
                ),
            ));
        }
    }

    if stats.total_outfits < thresholds.min_outfits {
        advisories.push(Advisory::new(
            Priority::Medium,
            "Create more outfits",
            format!(
                "Only {} outfit(s) so far. Composing a few more makes it easier \
                 to rotate through the wardrobe.",
                stats.total_outfits
            ),
        ));
    }

    let low_roi: Vec<&str> = snapshot
        .items
        .iter()
        .filter(|i| {
            i.price.is_some_and(|p| p > thresholds.high_price)
                && i.use_count < thresholds.low_use
        })
        .map(|i| i.name.as_str())
        .collect();
    if !low_roi.is_empty() {
        advisories.push(Advisory::new(
            Priority::High,
            "Low return on expensive items",
            format!(
                "Worn fewer than {} times despite their price: {}.",
                thresholds.low_use,
                low_roi.join(", ")
            ),
        ));
    }

    let upcoming = Season::for_date(today).next();
    let upcoming_count = snapshot.items.iter().filter(|i| i.suits(upcoming)).count();
    if upcoming_count < thresholds.next_season_min {
        advisories.push(Advisory::new(
            Priority::Low,
            "Prepare for next season",
            format!(
                "Only {upcoming_count} item(s) suited to {upcoming}. Worth \
                 reviewing before the season turns."
            ),
        ));
    }

    let brands: HashSet<&str> = snapshot
        .items
        .iter()
        .filter_map(|i| i.brand.as_deref())
        .collect();
    if brands.len() < thresholds.min_brands {
        advisories.push(Advisory::new(
            Priority::Low,
            "Try more brands",
            format!(
                "Only {} distinct brand(s) represented. Exploring others can \
                 diversify fit and style.",
                brands.len()
            ),
        ));
    }

    let worn_out = snapshot
        .items
        .iter()
        .filter(|i| matches!(i.status, ClothingStatus::Damaged | ClothingStatus::Discarded))
        .count();
    if worn_out > 0 {
        advisories.push(Advisory::new(
            Priority::Medium,
            "Tidy the wardrobe",
            format!("{worn_out} item(s) are marked damaged or discarded. Clear them out."),
        ));
    }

    if stats.utilization.rate < thresholds.min_utilization {
        advisories.push(Advisory::new(
            Priority::High,
            "Raise utilization",
            format!(
                "Only {:.1}% of items have been worn at least once.",
                stats.utilization.rate
            ),
        ));
    }

    // Stable sort keeps rule-evaluation order within each priority tier.
    advisories.sort_by(|a, b| b.priority.cmp(&a.priority));
    advisories
}

/// Largest category by item count; ties resolve to the lexicographically
/// smaller name so the advisory text is deterministic.
fn dominant_category(stats: &Statistics) -> Option<(String, usize)> {
    stats
        .category_breakdown
        .iter()
        .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
        .map(|(name, count)| (name.clone(), *count))
}
