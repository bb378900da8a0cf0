//! Tests for the reconciliation pass

use orggen::domain::node::Node;
use orggen::domain::reconcile::{reconcile, Reconciliation};
use orggen::util::testing;

/// Root with `children` leaf children, ids continuing from the root's.
fn tree_with_children(children: usize) -> Node {
    let mut root = Node::new("1");
    for id in 2..=children + 1 {
        root.children.push(Node::new(id.to_string()));
    }
    root
}

#[test]
fn given_balanced_tree_when_reconciling_then_changes_nothing() {
    testing::init_test_setup();
    let mut root = tree_with_children(3);
    let before = root.clone();

    let outcome = reconcile(&mut root, 4);

    assert_eq!(outcome, Reconciliation::Balanced);
    assert_eq!(root, before);
}

#[test]
fn given_balanced_tree_when_reconciling_twice_then_still_changes_nothing() {
    let mut root = tree_with_children(4);

    assert_eq!(reconcile(&mut root, 5), Reconciliation::Balanced);
    assert_eq!(reconcile(&mut root, 5), Reconciliation::Balanced);
    assert_eq!(root.count_nodes(), 5);
}

#[test]
fn given_short_tree_when_reconciling_then_appends_direct_reports() {
    let mut root = tree_with_children(2);

    let outcome = reconcile(&mut root, 5);

    assert_eq!(outcome, Reconciliation::Repaired { added: 2 });
    assert_eq!(root.count_nodes(), 5);
    // New ids continue the creation sequence.
    let ids: Vec<&str> = root.children.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "3", "4", "5"]);
}

#[test]
fn given_repaired_tree_when_reconciling_again_then_balanced() {
    let mut root = tree_with_children(1);

    assert_eq!(reconcile(&mut root, 4), Reconciliation::Repaired { added: 2 });
    assert_eq!(reconcile(&mut root, 4), Reconciliation::Balanced);
}

#[test]
fn given_overfull_tree_when_reconciling_then_reports_unresolved() {
    let mut root = tree_with_children(4);

    let outcome = reconcile(&mut root, 3);

    assert_eq!(
        outcome,
        Reconciliation::Unresolved {
            expected: 3,
            actual: 5
        }
    );
    // Best-effort tree is kept as-is.
    assert_eq!(root.count_nodes(), 5);
}

#[test]
fn given_deep_tree_when_reconciling_then_repair_stays_under_the_root() {
    let mut root = Node::new("1");
    let mut manager = Node::new("2");
    manager.children.push(Node::new("3"));
    root.children.push(manager);

    let outcome = reconcile(&mut root, 5);

    assert_eq!(outcome, Reconciliation::Repaired { added: 2 });
    assert_eq!(root.depth(), 3, "repair adds no depth");
    assert_eq!(root.children.len(), 3);
    assert_eq!(root.children[1].id, "4");
    assert_eq!(root.children[2].id, "5");
}
