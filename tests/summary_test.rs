//! Tests for the organization summary legend

use orggen::domain::generator::generate_hierarchy;
use orggen::domain::params::{GenerationParams, Model};
use orggen::domain::summary::HierarchySummary;
use orggen::util::testing;

#[test]
fn given_uniform_strict_tree_when_summarizing_then_counts_managers_and_staff() {
    testing::init_test_setup();
    let params = GenerationParams::Strict {
        total: 13,
        ratio: 3,
    };

    let result = generate_hierarchy(&params).unwrap();
    let summary = HierarchySummary::new(params.model(), &result);

    // Root plus the three mid-level nodes manage someone; the nine leaves
    // do not.
    assert_eq!(summary.model, Model::Strict);
    assert_eq!(summary.total_employees, 13);
    assert_eq!(summary.managers, 4);
    assert_eq!(summary.non_managerial, 9);
    assert_eq!(summary.actual_ratio, Some(2.25));
    assert_eq!(summary.levels, 3);
}

#[test]
fn given_summary_when_displaying_then_renders_legend_lines() {
    let params = GenerationParams::Strict {
        total: 13,
        ratio: 3,
    };

    let result = generate_hierarchy(&params).unwrap();
    let rendered = HierarchySummary::new(params.model(), &result).to_string();

    assert!(rendered.contains("Model Type: strict"));
    assert!(rendered.contains("Total Employees: 13"));
    assert!(rendered.contains("Total Managers: 4"));
    assert!(rendered.contains("Non-Managerial Staff: 9"));
    assert!(rendered.contains("Actual Manager to Staff Ratio: 1:2.25"));
    assert!(rendered.contains("Hierarchy Levels: 3"));
}

#[test]
fn given_bare_root_when_summarizing_then_ratio_is_absent() {
    let params = GenerationParams::Strict { total: 1, ratio: 3 };

    let result = generate_hierarchy(&params).unwrap();
    let summary = HierarchySummary::new(params.model(), &result);

    assert_eq!(summary.managers, 0);
    assert_eq!(summary.non_managerial, 1);
    assert_eq!(summary.actual_ratio, None);
    assert!(summary.to_string().contains("Ratio: N/A"));
}

#[test]
fn given_reconciled_tree_when_summarizing_then_counts_include_repairs() {
    // ratio 0 leaves everything to the reconciler; the root then manages
    // all four appended reports.
    let params = GenerationParams::Strict { total: 5, ratio: 0 };

    let result = generate_hierarchy(&params).unwrap();
    let summary = HierarchySummary::new(params.model(), &result);

    assert_eq!(summary.total_employees, 5);
    assert_eq!(summary.managers, 1);
    assert_eq!(summary.non_managerial, 4);
    assert_eq!(summary.actual_ratio, Some(4.0));
    assert_eq!(summary.levels, 1);
}
