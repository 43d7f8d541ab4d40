//! Statistics aggregation for one wardrobe.
//!
//! `compute_statistics` is synchronous and pure: it reads no clock and does
//! no I/O. Every "now"-relative figure (idle detection, the wear-trend
//! window) is derived from the injected reference date, so callers can pin it
//! in tests and pass the wall-clock date in production.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::aggregate::{bucket_by_day, frequency_count, top_n_by};
use crate::core::{ClothingStatus, Season, WardrobeSnapshot};

/// An item is idle once it has gone unworn for this many days (inclusive).
pub const IDLE_THRESHOLD_DAYS: i64 = 30;

/// Days-since-last-wear reported for items that were never worn.
pub const NEVER_WORN_SENTINEL: i64 = 999;

/// Length of the wear-trend series, one point per trailing calendar day.
pub const WEAR_TREND_WINDOW_DAYS: usize = 30;

/// Ranking length for most-worn items and brand stats.
pub const RANKING_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtilizationSummary {
    pub total: usize,
    pub worn: usize,
    /// Percentage of items worn at least once, 0 when the wardrobe is empty.
    pub rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdleClothing {
    pub id: String,
    pub name: String,
    pub days_since_last_wear: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WearTrendPoint {
    pub date: NaiveDate,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandStat {
    pub brand: String,
    pub item_count: usize,
    pub total_use: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopClothing {
    pub id: String,
    pub name: String,
    pub use_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub use_count: u32,
}

/// Immutable derived snapshot for one wardrobe, recomputed on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Reference date all time-relative figures were computed against.
    pub generated_for: NaiveDate,
    pub total_clothings: usize,
    pub total_outfits: usize,
    /// Sum of defined prices; unpriced items contribute 0.
    pub total_value: f64,
    /// Average over priced items only, 0 when none are priced.
    pub avg_price: f64,
    pub utilization: UtilizationSummary,
    pub category_breakdown: HashMap<String, usize>,
    pub status_breakdown: HashMap<ClothingStatus, usize>,
    /// An item counts once per season it is suited to.
    pub season_breakdown: HashMap<Season, usize>,
    /// Current-season items unworn for at least [`IDLE_THRESHOLD_DAYS`],
    /// longest-idle first, never-worn (sentinel) before everything else,
    /// ties broken by item id.
    pub idle_clothings: Vec<IdleClothing>,
    /// Exactly [`WEAR_TREND_WINDOW_DAYS`] contiguous points, oldest first.
    pub wear_trends: Vec<WearTrendPoint>,
    /// Top brands by summed use count, first-encountered order on ties.
    pub brand_stats: Vec<BrandStat>,
    /// Most-worn items; zero-use items are excluded entirely.
    pub top_clothings: Vec<TopClothing>,
    /// One point per priced item, for price-vs-usage rendering.
    pub price_usage: Vec<PricePoint>,
}

/// Computes the full statistics snapshot for one wardrobe.
///
/// Accepts degenerate input without error: an empty snapshot yields an
/// all-zero snapshot with empty lists and a zero-filled trend series.
pub fn compute_statistics(snapshot: &WardrobeSnapshot, today: NaiveDate) -> Statistics {
    let items = &snapshot.items;

    let prices: Vec<f64> = items.iter().filter_map(|i| i.price).collect();
    let total_value: f64 = prices.iter().sum();
    let avg_price = if prices.is_empty() {
        0.0
    } else {
        total_value / prices.len() as f64
    };

    let worn = items.iter().filter(|i| i.is_worn()).count();
    let rate = if items.is_empty() {
        0.0
    } else {
        worn as f64 / items.len() as f64 * 100.0
    };

    let category_breakdown = frequency_count(items.iter(), |item| {
        snapshot.category_name(&item.category_id).to_string()
    });
    let status_breakdown = frequency_count(items.iter(), |item| item.status);
    let season_breakdown =
        frequency_count(items.iter().flat_map(|item| item.seasons.iter()), |s| *s);

    let wear_trends = bucket_by_day(
        items,
        |item| item.last_used_at.map(|t| t.date_naive()),
        WEAR_TREND_WINDOW_DAYS,
        today,
    )
    .into_iter()
    .map(|(date, count)| WearTrendPoint { date, count })
    .collect();

    let top_clothings = top_n_by(
        items
            .iter()
            .filter(|i| i.is_worn())
            .map(|i| TopClothing {
                id: i.id.clone(),
                name: i.name.clone(),
                use_count: i.use_count,
            })
            .collect(),
        RANKING_LIMIT,
        |a, b| a.use_count.cmp(&b.use_count),
    );

    let price_usage = items
        .iter()
        .filter_map(|i| {
            i.price.map(|price| PricePoint {
                id: i.id.clone(),
                name: i.name.clone(),
                price,
                use_count: i.use_count,
            })
        })
        .collect();

    Statistics {
        generated_for: today,
        total_clothings: items.len(),
        total_outfits: snapshot.outfits.len(),
        total_value,
        avg_price,
        utilization: UtilizationSummary {
            total: items.len(),
            worn,
            rate,
        },
        category_breakdown,
        status_breakdown,
        season_breakdown,
        idle_clothings: collect_idle(snapshot, today),
        wear_trends,
        brand_stats: collect_brand_stats(snapshot),
        top_clothings,
        price_usage,
    }
}

/// Days since the item was last worn, or the never-worn sentinel.
pub fn days_since_last_wear(
    last_used_at: Option<chrono::DateTime<chrono::Utc>>,
    today: NaiveDate,
) -> i64 {
    match last_used_at {
        None => NEVER_WORN_SENTINEL,
        Some(ts) => (today - ts.date_naive()).num_days(),
    }
}

fn collect_idle(snapshot: &WardrobeSnapshot, today: NaiveDate) -> Vec<IdleClothing> {
    let current = Season::for_date(today);

    // The never-worn flag sorts ahead of the day count: an item last worn
    // more than NEVER_WORN_SENTINEL days ago must still rank below items
    // that were never worn at all.
    let mut idle: Vec<(bool, IdleClothing)> = snapshot
        .items
        .iter()
        .filter(|item| item.suits(current))
        .filter_map(|item| {
            let never_worn = item.last_used_at.is_none();
            let days = days_since_last_wear(item.last_used_at, today);
            let is_idle = never_worn || days >= IDLE_THRESHOLD_DAYS;
            is_idle.then(|| {
                (
                    never_worn,
                    IdleClothing {
                        id: item.id.clone(),
                        name: item.name.clone(),
                        days_since_last_wear: days,
                    },
                )
            })
        })
        .collect();

    idle.sort_by(|a, b| {
        b.0.cmp(&a.0)
            .then_with(|| b.1.days_since_last_wear.cmp(&a.1.days_since_last_wear))
            .then_with(|| a.1.id.cmp(&b.1.id))
    });
    idle.into_iter().map(|(_, entry)| entry).collect()
}

fn collect_brand_stats(snapshot: &WardrobeSnapshot) -> Vec<BrandStat> {
    // Insertion-ordered tally so equal-use brands rank in first-encountered
    // order after the stable top-N sort.
    let mut order: Vec<BrandStat> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for item in &snapshot.items {
        let Some(brand) = item.brand.as_deref() else {
            continue;
        };
        let slot = *index.entry(brand).or_insert_with(|| {
            order.push(BrandStat {
                brand: brand.to_string(),
                item_count: 0,
                total_use: 0,
            });
            order.len() - 1
        });
        order[slot].item_count += 1;
        order[slot].total_use += u64::from(item.use_count);
    }

    top_n_by(order, RANKING_LIMIT, |a, b| a.total_use.cmp(&b.total_use))
}
