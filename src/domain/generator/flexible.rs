//! Flexible ratio model with hard min/max branching bounds.

use tracing::{debug, instrument};

use crate::domain::generator::{attach_levels, GrownTree};
use crate::domain::node::Node;

/// Grows the tree level by level until every employee is placed or growth
/// stalls.
///
/// Each level absorbs at most `level_size * max` nodes. Parents are walked
/// repeatedly; an eligible parent receives up to
/// `min(max(min, min(ratio, max, remaining)), free slots)` children, one at
/// a time, with termination checked after every single attachment. `max` is
/// a hard per-parent bound: the `min` floor is clamped to the free slots
/// rather than overshooting the cap.
#[instrument(level = "debug")]
pub(super) fn grow(total: usize, ratio: usize, min: usize, max: usize) -> GrownTree {
    let mut remaining = total - 1;
    let mut next_id = 2usize;
    let mut level_nodes: Vec<Vec<Node>> = vec![vec![Node::new("1")]];
    let mut assignments: Vec<Vec<usize>> = Vec::new();
    let mut levels = 1usize;

    while remaining > 0 {
        let parent_count = level_nodes.last().map(Vec::len).unwrap_or(0);
        let mut child_counts = vec![0usize; parent_count];
        let level_quota = remaining.min(parent_count * max);
        let mut distributed = 0usize;
        let mut assignment: Vec<usize> = Vec::new();

        while distributed < level_quota && remaining > 0 {
            let before_pass = distributed;
            for parent in 0..parent_count {
                if child_counts[parent] < max && distributed < level_quota && remaining > 0 {
                    let target_reports = ratio.min(max).min(remaining);
                    let free_slots = max - child_counts[parent];
                    let actual_reports = target_reports.max(min).min(free_slots);

                    for _ in 0..actual_reports {
                        assignment.push(parent);
                        child_counts[parent] += 1;
                        remaining -= 1;
                        distributed += 1;

                        if distributed >= level_quota || remaining == 0 {
                            break;
                        }
                    }
                }
                if distributed >= level_quota || remaining == 0 {
                    break;
                }
            }
            // A full pass over the parents that attaches nothing means the
            // level is saturated.
            if distributed == before_pass {
                break;
            }
        }

        if assignment.is_empty() {
            debug!(remaining, "growth stalled, leaving employees unplaced");
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

    let unplaced = remaining;
    let root = attach_levels(level_nodes, assignments);

    GrownTree {
        root,
        levels,
        unplaced,
    }
}
