//! Outfit relation analysis: per-item appearance frequency and co-occurring
//! items across all outfits of one wardrobe.
//!
//! Co-occurrence is counted per ordered pair, so every item holds its own
//! relation tally rather than sharing an undirected structure; each item's
//! perspective is queried independently by the UI. Per-item tallies are
//! insertion-ordered vectors, which keeps the first-observed tie-break
//! explicit and deterministic under the stable top-N sort. Counting is
//! O(n^2) in outfit size; wardrobes are small.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::aggregate::top_n_by;
use crate::core::Outfit;

/// How many co-occurring items each relation reports.
pub const RELATED_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedClothing {
    pub id: String,
    /// Number of outfits in which both items appear.
    pub count: usize,
}

/// One item's view of the outfit membership graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClothingRelation {
    pub id: String,
    /// Number of outfits the item appears in.
    pub frequency: usize,
    /// Top co-occurring items by shared-outfit count, descending; ties keep
    /// first-observed order.
    pub related: Vec<RelatedClothing>,
}

#[derive(Default)]
struct Tally {
    frequency: usize,
    related: Vec<RelatedClothing>,
}

impl Tally {
    fn record_pair(&mut self, other: &str) {
        match self.related.iter_mut().find(|r| r.id == other) {
            Some(entry) => entry.count += 1,
            None => self.related.push(RelatedClothing {
                id: other.to_string(),
                count: 1,
            }),
        }
    }
}

/// Computes relations for every item appearing in at least one outfit.
///
/// Output is sorted by frequency descending; ties keep first-observed order.
/// Items that never appear in an outfit are omitted entirely. Outfits with
/// zero or one member contribute no pairs but still count toward frequency.
pub fn analyze_relations(outfits: &[Outfit]) -> Vec<ClothingRelation> {
    let mut order: Vec<String> = Vec::new();
    let mut tallies: HashMap<String, Tally> = HashMap::new();

    for outfit in outfits {
        for id in &outfit.item_ids {
            tallies
                .entry(id.clone())
                .or_insert_with(|| {
                    order.push(id.clone());
                    Tally::default()
                })
                .frequency += 1;
        }

        for a in &outfit.item_ids {
            for b in &outfit.item_ids {
                if a == b {
                    continue;
                }
                if let Some(tally) = tallies.get_mut(a) {
                    tally.record_pair(b);
                }
            }
        }
    }

    let mut relations: Vec<ClothingRelation> = order
        .into_iter()
        .filter_map(|id| {
            let tally = tallies.remove(&id)?;
            Some(ClothingRelation {
                id,
                frequency: tally.frequency,
                related: top_n_by(tally.related, RELATED_LIMIT, |a, b| a.count.cmp(&b.count)),
            })
        })
        .collect();

    relations.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    relations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Outfit;

    fn outfit(id: &str, items: &[&str]) -> Outfit {
        Outfit {
            id: id.to_string(),
            name: id.to_string(),
            item_ids: items.iter().map(|s| s.to_string()).collect(),
            use_count: 0,
            last_used_at: None,
            description: None,
            tags: Vec::new(),
            seasons: Vec::new(),
        }
    }

    #[test]
    fn empty_outfit_list_yields_no_relations() {
        assert!(analyze_relations(&[]).is_empty());
    }

    #[test]
    fn single_member_outfit_counts_frequency_without_pairs() {
        let relations = analyze_relations(&[outfit("o1", &["a"])]);
        assert_eq!(relations.len(), 1);
        assert_eq!(relations[0].frequency, 1);
        assert!(relations[0].related.is_empty());
    }

    #[test]
    fn pair_counts_are_symmetric_per_perspective() {
        let relations = analyze_relations(&[outfit("o1", &["a", "b", "c"])]);
        let a = relations.iter().find(|r| r.id == "a").unwrap();
        assert_eq!(a.frequency, 1);
        assert!(a.related.iter().any(|r| r.id == "b" && r.count == 1));
        assert!(a.related.iter().any(|r| r.id == "c" && r.count == 1));

        let c = relations.iter().find(|r| r.id == "c").unwrap();
        assert!(c.related.iter().any(|r| r.id == "a" && r.count == 1));
    }

    #[test]
    fn ties_keep_first_observed_order() {
        let relations = analyze_relations(&[outfit("o1", &["a", "b"]), outfit("o2", &["a", "c"])]);
        let a = relations.iter().find(|r| r.id == "a").unwrap();
        assert_eq!(a.frequency, 2);
        assert_eq!(a.related[0].id, "b");
        assert_eq!(a.related[1].id, "c");
    }

    #[test]
    fn related_list_is_capped() {
        let members: Vec<String> = (0..8).map(|i| format!("item{i}")).collect();
        let refs: Vec<&str> = members.iter().map(|s| s.as_str()).collect();
        let relations = analyze_relations(&[outfit("o1", &refs)]);
        assert!(relations.iter().all(|r| r.related.len() <= RELATED_LIMIT));
    }
}
