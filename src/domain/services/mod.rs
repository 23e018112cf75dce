//! Domain Services
//!
//! Stateless logic over load-time-fixed data.

mod network_catalog;
mod source_filter;
mod suggest;
mod target_registry;

pub use network_catalog::{NetworkCatalog, NetworkSpec};
pub use source_filter::{filter_sources, SourceSetFilter};
pub use suggest::{closest_match, levenshtein};
pub use target_registry::TargetRegistry;
