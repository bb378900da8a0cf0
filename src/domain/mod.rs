//! Domain layer: hierarchy generation, reconciliation, and summaries
//!
//! This layer is independent of external concerns (no I/O, no CLI, no
//! config loading).

pub mod distribute;
pub mod error;
pub mod generator;
pub mod node;
pub mod params;
pub mod reconcile;
pub mod summary;

pub use distribute::distribute;
pub use error::{GenResult, GenerationError};
pub use generator::{generate_hierarchy, GenerationResult};
pub use node::Node;
pub use params::{GenerationParams, Model};
pub use reconcile::{reconcile, Reconciliation};
pub use summary::HierarchySummary;
