// Export modules for library usage
pub mod advisor;
pub mod aggregate;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod io;
pub mod relations;
pub mod stats;

// Re-export commonly used types
pub use crate::core::{
    Category, ClothingItem, ClothingStatus, Outfit, Priority, Season, WardrobeSnapshot,
};

pub use crate::stats::{
    compute_statistics, BrandStat, IdleClothing, PricePoint, Statistics, TopClothing,
    UtilizationSummary, WearTrendPoint,
};

pub use crate::relations::{analyze_relations, ClothingRelation, RelatedClothing};

pub use crate::advisor::{advise, Advisory};

pub use crate::aggregate::{bucket_by_day, frequency_count, top_n_by};

pub use crate::config::{Thresholds, WearmapConfig};

pub use crate::errors::WearmapError;

pub use crate::io::input::{load_snapshot, validate_snapshot};
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
