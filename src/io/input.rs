//! Wardrobe export loading.
//!
//! This is the single validation point: after `load_snapshot` returns, item
//! ids are unique and every outfit member resolves, so the analysis modules
//! can treat the snapshot as well-formed.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::core::WardrobeSnapshot;
use crate::errors::WearmapError;

pub fn load_snapshot(path: &Path) -> Result<WardrobeSnapshot, WearmapError> {
    let content = fs::read_to_string(path).map_err(|source| WearmapError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let snapshot: WardrobeSnapshot =
        serde_json::from_str(&content).map_err(|e| WearmapError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    validate_snapshot(&snapshot)?;
    log::debug!(
        "loaded {} items, {} outfits, {} categories from {}",
        snapshot.items.len(),
        snapshot.outfits.len(),
        snapshot.categories.len(),
        path.display()
    );
    Ok(snapshot)
}

pub fn validate_snapshot(snapshot: &WardrobeSnapshot) -> Result<(), WearmapError> {
    let mut item_ids = HashSet::new();
    for item in &snapshot.items {
        if !item_ids.insert(item.id.as_str()) {
            return Err(WearmapError::DuplicateItem {
                id: item.id.clone(),
            });
        }
    }

    let mut outfit_ids = HashSet::new();
    for outfit in &snapshot.outfits {
        if !outfit_ids.insert(outfit.id.as_str()) {
            return Err(WearmapError::DuplicateOutfit {
                id: outfit.id.clone(),
            });
        }
        // Members form an ordered set: each item at most once per outfit.
        // The relation analyzer counts one appearance per membership entry,
        // so a repeated id would inflate its frequency.
        let mut members = HashSet::new();
        for member in &outfit.item_ids {
            if !item_ids.contains(member.as_str()) {
                return Err(WearmapError::UnknownOutfitMember {
                    outfit: outfit.id.clone(),
                    item: member.clone(),
                });
            }
            if !members.insert(member.as_str()) {
                return Err(WearmapError::DuplicateOutfitMember {
                    outfit: outfit.id.clone(),
                    item: member.clone(),
                });
            }
        }
    }

    Ok(())
}
