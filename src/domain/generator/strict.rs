//! Strict ratio model: a uniform ratio-ary tree.

use tracing::instrument;

use crate::domain::generator::{attach_levels, GrownTree};
use crate::domain::node::Node;

/// Grows a uniform `ratio`-ary tree, trimming the last level to fit.
///
/// Each parent receives exactly `min(ratio, remaining)` children; once the
/// remainder runs out, later parents on the same level stay childless. A
/// ratio of 0 produces the bare root and leaves the remainder to the
/// reconciler.
#[instrument(level = "debug")]
pub(super) fn grow(total: usize, ratio: usize) -> GrownTree {
    let mut remaining = total - 1;
    let mut next_id = 2usize;
    let mut level_nodes: Vec<Vec<Node>> = vec![vec![Node::new("1")]];
    let mut assignments: Vec<Vec<usize>> = Vec::new();
    let mut levels = 1usize;

    while remaining > 0 {
        let parent_count = level_nodes.last().map(Vec::len).unwrap_or(0);
        let mut assignment: Vec<usize> = Vec::new();

        for parent in 0..parent_count {
            let reports = ratio.min(remaining);
            for _ in 0..reports {
                assignment.push(parent);
                remaining -= 1;
            }
        }

        if assignment.is_empty() {
            break;
        }

        let nodes: Vec<Node> = assignment
            .iter()
            .map(|_| {
                let node = Node::new(next_id.to_string());
                next_id += 1;
                node
            })
            .collect();
        levels += 1;
        assignments.push(assignment);
        level_nodes.push(nodes);
    }

    let root = attach_levels(level_nodes, assignments);

    GrownTree {
        root,
        levels,
        unplaced: 0,
    }
}
