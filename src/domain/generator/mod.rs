//! Hierarchy generators and model dispatch.

mod fixed;
mod flexible;
mod strict;

use tracing::instrument;

use crate::domain::error::GenResult;
use crate::domain::node::Node;
use crate::domain::params::GenerationParams;
use crate::domain::reconcile::{reconcile, Reconciliation};

/// Result of a generation run, handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    /// Root of the generated tree
    pub root: Node,
    /// Hierarchy levels produced by the generator (root = level 1), counted
    /// before any reconciliation insertion
    pub levels: usize,
    /// Employees the flexible model could not place; always 0 for the
    /// other models
    pub unplaced: usize,
    /// Outcome of the post-generation count check
    pub reconciliation: Reconciliation,
}

/// A tree as grown by one policy, before reconciliation.
struct GrownTree {
    root: Node,
    levels: usize,
    unplaced: usize,
}

/// Builds a hierarchy for `params`, then reconciles the node count.
///
/// Invalid parameters fail before any construction begins; a node-count
/// mismatch never does (see [`Reconciliation`]).
#[instrument(level = "debug")]
pub fn generate_hierarchy(params: &GenerationParams) -> GenResult<GenerationResult> {
    params.validate()?;

    let grown = match *params {
        GenerationParams::FixedLevels {
            total,
            levels,
            max_reports,
        } => fixed::grow(total, levels, max_reports),
        GenerationParams::Flexible {
            total,
            ratio,
            min,
            max,
        } => flexible::grow(total, ratio, min, max),
        GenerationParams::Strict { total, ratio } => strict::grow(total, ratio),
    };

    let GrownTree {
        mut root,
        levels,
        unplaced,
    } = grown;
    let reconciliation = reconcile(&mut root, params.total());

    Ok(GenerationResult {
        root,
        levels,
        unplaced,
        reconciliation,
    })
}

/// Folds per-level node lists into one owned tree.
///
/// `levels[0]` is the root level; `assignments[i]` maps each node of
/// `levels[i + 1]` (in creation order) to the index of its parent in
/// `levels[i]`. Attachment runs bottom-up so every node is moved into its
/// parent exactly once.
fn attach_levels(mut levels: Vec<Vec<Node>>, mut assignments: Vec<Vec<usize>>) -> Node {
    while levels.len() > 1 {
        let children = levels.pop().unwrap_or_default();
        let assignment = assignments.pop().unwrap_or_default();
        if let Some(parents) = levels.last_mut() {
            for (child, &parent_index) in children.into_iter().zip(assignment.iter()) {
                parents[parent_index].children.push(child);
            }
        }
    }
    levels
        .pop()
        .and_then(|mut root_level| root_level.pop())
        .expect("generators seed the root level")
}
