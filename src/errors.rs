//! Typed errors for the wardrobe-export boundary.
//!
//! Validation happens exactly once, when an export is loaded; the analysis
//! modules never fail and never re-check these invariants.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WearmapError {
    #[error("failed to read wardrobe export {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid wardrobe export {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("duplicate clothing item id `{id}` in wardrobe export")]
    DuplicateItem { id: String },

    #[error("duplicate outfit id `{id}` in wardrobe export")]
    DuplicateOutfit { id: String },

    #[error("outfit `{outfit}` references unknown clothing item `{item}`")]
    UnknownOutfitMember { outfit: String, item: String },

    #[error("outfit `{outfit}` lists clothing item `{item}` more than once")]
    DuplicateOutfitMember { outfit: String, item: String },
}
