//! Fixed level count model.

use tracing::instrument;

use crate::domain::generator::{attach_levels, GrownTree};
use crate::domain::node::Node;

/// Builds a tree with an exact target level count.
///
/// The ideal node count at level `i` follows `max_reports^i` growth capped
/// by the remaining total; whatever the growth cannot absorb lands on the
/// last level. Children distribute round-robin over the previous level's
/// parents, so a single parent may receive more than `max_reports` children
/// when a level's target exceeds the cap-respecting capacity. The cap
/// bounds the ideal targets, not the assignment.
#[instrument(level = "debug")]
pub(super) fn grow(total: usize, levels: usize, max_reports: usize) -> GrownTree {
    let mut remaining = total - 1;

    // Ideal node count at each level, root level first.
    let mut targets = vec![1usize];
    for level in 1..levels {
        let capacity = max_reports.saturating_pow(level as u32);
        let nodes = capacity.min(remaining);
        targets.push(nodes);
        remaining -= nodes;
    }
    // Leftover goes entirely to the last level; when levels is 1 it lands on
    // the root's own target, which the build below never reads, and the
    // reconciler picks up the shortfall.
    if let Some(last) = targets.last_mut() {
        *last += remaining;
    }

    let mut next_id = 2usize;
    let mut level_nodes: Vec<Vec<Node>> = vec![vec![Node::new("1")]];
    let mut assignments: Vec<Vec<usize>> = Vec::new();

    for &target in targets.iter().skip(1) {
        let parent_count = level_nodes.last().map(Vec::len).unwrap_or(0);
        let nodes: Vec<Node> = (0..target)
            .map(|_| {
                let node = Node::new(next_id.to_string());
                next_id += 1;
                node
            })
            .collect();
        let assignment = if parent_count > 0 {
            (0..target).map(|index| index % parent_count).collect()
        } else {
            Vec::new()
        };
        assignments.push(assignment);
        level_nodes.push(nodes);
    }

    let populated = level_nodes.iter().filter(|level| !level.is_empty()).count();
    let root = attach_levels(level_nodes, assignments);

    GrownTree {
        root,
        levels: populated,
        unplaced: 0,
    }
}
