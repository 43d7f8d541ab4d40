mod common;

use common::{date, item, outfit, snapshot, ts};
use pretty_assertions::assert_eq;
use wearmap::core::Season;
use wearmap::stats::{
    compute_statistics, IDLE_THRESHOLD_DAYS, NEVER_WORN_SENTINEL, WEAR_TREND_WINDOW_DAYS,
};

#[test]
fn empty_wardrobe_yields_all_zero_snapshot() {
    let stats = compute_statistics(&snapshot(vec![], vec![]), date(2024, 6, 15));

    assert_eq!(stats.total_clothings, 0);
    assert_eq!(stats.total_outfits, 0);
    assert_eq!(stats.total_value, 0.0);
    assert_eq!(stats.avg_price, 0.0);
    assert_eq!(stats.utilization.rate, 0.0);
    assert!(stats.category_breakdown.is_empty());
    assert!(stats.idle_clothings.is_empty());
    assert!(stats.top_clothings.is_empty());
    assert!(stats.brand_stats.is_empty());
    assert!(stats.price_usage.is_empty());
    assert_eq!(stats.wear_trends.len(), WEAR_TREND_WINDOW_DAYS);
    assert!(stats.wear_trends.iter().all(|p| p.count == 0));
}

#[test]
fn value_and_utilization_scenario() {
    let mut a = item("a");
    a.price = Some(100.0);
    a.use_count = 5;
    let mut b = item("b");
    b.price = Some(300.0);
    b.use_count = 0;

    let stats = compute_statistics(&snapshot(vec![a, b], vec![]), date(2024, 6, 15));

    assert_eq!(stats.total_value, 400.0);
    assert_eq!(stats.avg_price, 200.0);
    assert_eq!(stats.utilization.rate, 50.0);
    assert_eq!(stats.utilization.worn, 1);
}

#[test]
fn unpriced_items_are_excluded_from_the_average() {
    let mut a = item("a");
    a.price = Some(90.0);
    let b = item("b");

    let stats = compute_statistics(&snapshot(vec![a, b], vec![]), date(2024, 6, 15));

    assert_eq!(stats.total_value, 90.0);
    assert_eq!(stats.avg_price, 90.0);
    assert_eq!(stats.price_usage.len(), 1);
}

#[test]
fn avg_price_times_priced_count_matches_total_value() {
    let prices = [12.5, 89.99, 240.0, 5.0];
    let items: Vec<_> = prices
        .iter()
        .enumerate()
        .map(|(n, p)| {
            let mut it = item(&format!("i{n}"));
            it.price = Some(*p);
            it
        })
        .collect();

    let stats = compute_statistics(&snapshot(items, vec![]), date(2024, 6, 15));

    let reconstructed = stats.avg_price * prices.len() as f64;
    assert!((reconstructed - stats.total_value).abs() < 1e-9);
}

#[test]
fn utilization_rate_stays_in_range() {
    for worn in 0..=4usize {
        let items: Vec<_> = (0..4)
            .map(|n| {
                let mut it = item(&format!("i{n}"));
                it.use_count = if n < worn { 1 } else { 0 };
                it
            })
            .collect();
        let stats = compute_statistics(&snapshot(items, vec![]), date(2024, 6, 15));
        assert!((0.0..=100.0).contains(&stats.utilization.rate));
    }
}

#[test]
fn wear_trends_cover_exactly_thirty_contiguous_days() {
    let today = date(2024, 6, 30);
    let mut a = item("a");
    a.last_used_at = Some(ts(2024, 6, 30));
    let mut b = item("b");
    b.last_used_at = Some(ts(2024, 6, 10));
    let mut c = item("c");
    c.last_used_at = Some(ts(2023, 12, 25)); // outside the window

    let stats = compute_statistics(&snapshot(vec![a, b, c], vec![]), today);

    assert_eq!(stats.wear_trends.len(), 30);
    for pair in stats.wear_trends.windows(2) {
        assert_eq!(pair[1].date, pair[0].date.succ_opt().unwrap());
    }
    assert_eq!(stats.wear_trends.last().unwrap().date, today);

    let total: usize = stats.wear_trends.iter().map(|p| p.count).sum();
    assert_eq!(total, 2);
}

#[test]
fn top_clothings_excludes_zero_use_and_sorts_descending() {
    let mut items = Vec::new();
    for (id, count) in [("a", 3u32), ("b", 0), ("c", 9), ("d", 5)] {
        let mut it = item(id);
        it.use_count = count;
        items.push(it);
    }

    let stats = compute_statistics(&snapshot(items, vec![]), date(2024, 6, 15));

    let counts: Vec<u32> = stats.top_clothings.iter().map(|t| t.use_count).collect();
    assert_eq!(counts, vec![9, 5, 3]);
    assert!(stats.top_clothings.iter().all(|t| t.use_count > 0));
    assert!(stats.top_clothings.len() <= 10);
}

#[test]
fn top_clothings_is_capped_at_ten() {
    let items: Vec<_> = (0..15)
        .map(|n| {
            let mut it = item(&format!("i{n}"));
            it.use_count = n + 1;
            it
        })
        .collect();

    let stats = compute_statistics(&snapshot(items, vec![]), date(2024, 6, 15));
    assert_eq!(stats.top_clothings.len(), 10);
}

#[test]
fn never_worn_winter_item_is_idle_in_january() {
    let mut a = item("a");
    a.seasons = vec![Season::Winter];
    a.last_used_at = None;

    let stats = compute_statistics(&snapshot(vec![a], vec![]), date(2024, 1, 15));

    assert_eq!(stats.idle_clothings.len(), 1);
    assert_eq!(
        stats.idle_clothings[0].days_since_last_wear,
        NEVER_WORN_SENTINEL
    );
}

#[test]
fn idle_requires_current_season_match() {
    let mut summer_only = item("a");
    summer_only.seasons = vec![Season::Summer];
    summer_only.last_used_at = None;

    let stats = compute_statistics(&snapshot(vec![summer_only], vec![]), date(2024, 1, 15));
    assert!(stats.idle_clothings.is_empty());
}

#[test]
fn idle_threshold_is_inclusive_at_thirty_days() {
    let today = date(2024, 7, 31);
    let mut on_boundary = item("a");
    on_boundary.seasons = vec![Season::Summer];
    on_boundary.last_used_at = Some(ts(2024, 7, 1)); // exactly 30 days
    let mut recent = item("b");
    recent.seasons = vec![Season::Summer];
    recent.last_used_at = Some(ts(2024, 7, 10));

    let stats = compute_statistics(&snapshot(vec![on_boundary, recent], vec![]), today);

    assert_eq!(stats.idle_clothings.len(), 1);
    assert_eq!(stats.idle_clothings[0].id, "a");
    assert_eq!(
        stats.idle_clothings[0].days_since_last_wear,
        IDLE_THRESHOLD_DAYS
    );
}

#[test]
fn idle_list_puts_never_worn_first_then_longest_idle() {
    let today = date(2024, 7, 31);
    let mut never = item("never");
    never.seasons = vec![Season::Summer];
    let mut old = item("old");
    old.seasons = vec![Season::Summer];
    old.last_used_at = Some(ts(2024, 5, 1));
    let mut older = item("older");
    older.seasons = vec![Season::Summer];
    older.last_used_at = Some(ts(2024, 4, 1));

    let stats = compute_statistics(&snapshot(vec![old, never, older], vec![]), today);

    let ids: Vec<&str> = stats
        .idle_clothings
        .iter()
        .map(|i| i.id.as_str())
        .collect();
    assert_eq!(ids, vec!["never", "older", "old"]);
}

#[test]
fn never_worn_ranks_above_items_idle_longer_than_the_sentinel() {
    let today = date(2024, 7, 31);
    let mut never = item("never");
    never.seasons = vec![Season::Summer];
    let mut ancient = item("ancient");
    ancient.seasons = vec![Season::Summer];
    // Last worn well over NEVER_WORN_SENTINEL days before the reference date.
    ancient.last_used_at = Some(ts(2021, 1, 10));

    let stats = compute_statistics(&snapshot(vec![ancient, never], vec![]), today);

    let ids: Vec<&str> = stats
        .idle_clothings
        .iter()
        .map(|i| i.id.as_str())
        .collect();
    assert_eq!(ids, vec!["never", "ancient"]);
    assert!(stats.idle_clothings[1].days_since_last_wear > NEVER_WORN_SENTINEL);
}

#[test]
fn category_breakdown_uses_names_and_buckets_unknown() {
    let a = item("a"); // c1 -> Tops
    let mut b = item("b");
    b.category_id = "c2".to_string(); // Bottoms
    let mut c = item("c");
    c.category_id = "missing".to_string();

    let stats = compute_statistics(&snapshot(vec![a, b, c], vec![]), date(2024, 6, 15));

    assert_eq!(stats.category_breakdown["Tops"], 1);
    assert_eq!(stats.category_breakdown["Bottoms"], 1);
    assert_eq!(stats.category_breakdown["Uncategorized"], 1);
}

#[test]
fn brand_stats_rank_by_total_use_with_first_encountered_ties() {
    let mut items = Vec::new();
    for (id, brand, count) in [
        ("a", "Acme", 2u32),
        ("b", "Zenith", 5),
        ("c", "Acme", 3),
        ("d", "Orbit", 5),
    ] {
        let mut it = item(id);
        it.brand = Some(brand.to_string());
        it.use_count = count;
        items.push(it);
    }
    let unbranded = item("e");
    items.push(unbranded);

    let stats = compute_statistics(&snapshot(items, vec![]), date(2024, 6, 15));

    let brands: Vec<&str> = stats.brand_stats.iter().map(|b| b.brand.as_str()).collect();
    // Acme totals 5 and was seen before Zenith (5) and Orbit (5).
    assert_eq!(brands, vec!["Acme", "Zenith", "Orbit"]);
    assert_eq!(stats.brand_stats[0].item_count, 2);
    assert_eq!(stats.brand_stats[0].total_use, 5);
}

#[test]
fn season_breakdown_counts_an_item_once_per_season() {
    let mut a = item("a");
    a.seasons = vec![Season::Spring, Season::Summer];
    let mut b = item("b");
    b.seasons = vec![Season::Summer];

    let stats = compute_statistics(&snapshot(vec![a, b], vec![]), date(2024, 6, 15));

    assert_eq!(stats.season_breakdown[&Season::Spring], 1);
    assert_eq!(stats.season_breakdown[&Season::Summer], 2);
    assert!(!stats.season_breakdown.contains_key(&Season::Winter));
}

#[test]
fn aggregation_is_idempotent() {
    let mut a = item("a");
    a.price = Some(120.0);
    a.use_count = 4;
    a.seasons = vec![Season::Summer];
    a.last_used_at = Some(ts(2024, 6, 1));
    let snap = snapshot(vec![a], vec![outfit("o1", &["a"])]);
    let today = date(2024, 6, 15);

    let first = compute_statistics(&snap, today);
    let second = compute_statistics(&snap, today);
    assert_eq!(first, second);
}
