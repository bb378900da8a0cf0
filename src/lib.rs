//! Synthetic organization hierarchy generation.
//!
//! Three structural policies distribute a total employee count under a
//! single root:
//! - `fixedLevels`: an exact level count, filled round-robin
//! - `flexible`: greedy growth towards a target ratio within min/max bounds
//! - `strict`: a perfectly uniform ratio tree, last level trimmed to fit
//!
//! A reconciliation pass repairs any under-allocation so every returned
//! tree holds exactly the requested number of nodes. The bundled CLI
//! renders results as a terminal tree diagram with a summary legend; the
//! library surface stands on its own.

pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use domain::{
    distribute, generate_hierarchy, GenResult, GenerationError, GenerationParams,
    GenerationResult, HierarchySummary, Model, Node, Reconciliation,
};
