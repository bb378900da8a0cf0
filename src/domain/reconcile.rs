//! Post-generation count enforcement.

use tracing::{error, instrument, warn};

use crate::domain::node::Node;

/// Outcome of the reconciliation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciliation {
    /// Node count matched the requested total
    Balanced,
    /// Count fell short; `added` nodes were attached under the root
    Repaired { added: usize },
    /// Count still disagrees after the repair pass
    Unresolved { expected: usize, actual: usize },
}

/// Verifies that the tree under `root` holds exactly `total` nodes,
/// appending direct children of the root (ids continuing the creation
/// sequence) when it falls short.
///
/// Over-allocation cannot be repaired and is reported as
/// [`Reconciliation::Unresolved`]; the best-effort tree is kept either way.
/// A balanced tree passes through untouched, so the pass is idempotent.
/// Repair never changes the level count: extra nodes sit directly under
/// the root.
#[instrument(level = "debug", skip(root))]
pub fn reconcile(root: &mut Node, total: usize) -> Reconciliation {
    let mut actual = root.count_nodes();
    if actual == total {
        return Reconciliation::Balanced;
    }

    warn!(
        expected = total,
        actual, "employee count mismatch, appending direct reports to the root"
    );
    let mut added = 0usize;
    while actual < total {
        actual += 1;
        root.children.push(Node::new(actual.to_string()));
        added += 1;
    }

    let recount = root.count_nodes();
    if recount != total {
        error!(
            expected = total,
            actual = recount,
            "employee count still incorrect after adjustment"
        );
        return Reconciliation::Unresolved {
            expected: total,
            actual: recount,
        };
    }
    Reconciliation::Repaired { added }
}
