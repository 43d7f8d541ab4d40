#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use wearmap::core::{Category, ClothingItem, ClothingStatus, Outfit, WardrobeSnapshot};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn ts(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
}

pub fn item(id: &str) -> ClothingItem {
    ClothingItem {
        id: id.to_string(),
        name: format!("item {id}"),
        category_id: "c1".to_string(),
        brand: None,
        price: None,
        colors: Vec::new(),
        seasons: Vec::new(),
        status: ClothingStatus::Active,
        use_count: 0,
        last_used_at: None,
        created_at: ts(2024, 1, 1),
    }
}

pub fn outfit(id: &str, members: &[&str]) -> Outfit {
    Outfit {
        id: id.to_string(),
        name: format!("outfit {id}"),
        item_ids: members.iter().map(|s| s.to_string()).collect(),
        use_count: 0,
        last_used_at: None,
        description: None,
        tags: Vec::new(),
        seasons: Vec::new(),
    }
}

pub fn category(id: &str, name: &str) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        level: 1,
        parent_id: None,
    }
}

pub fn snapshot(items: Vec<ClothingItem>, outfits: Vec<Outfit>) -> WardrobeSnapshot {
    WardrobeSnapshot {
        wardrobe_id: "w1".to_string(),
        items,
        outfits,
        categories: vec![category("c1", "Tops"), category("c2", "Bottoms")],
    }
}
