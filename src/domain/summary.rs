//! Display-ready organization statistics.

use std::fmt;

use crate::domain::generator::GenerationResult;
use crate::domain::params::Model;

/// Summary legend data computed from a generated hierarchy.
///
/// A manager is any node with at least one direct report; everyone else is
/// non-managerial staff. The ratio is staff per manager and is absent for
/// trees without managers (a lone root).
#[derive(Debug, Clone, PartialEq)]
pub struct HierarchySummary {
    pub model: Model,
    pub total_employees: usize,
    pub managers: usize,
    pub non_managerial: usize,
    pub actual_ratio: Option<f64>,
    pub levels: usize,
}

impl HierarchySummary {
    pub fn new(model: Model, result: &GenerationResult) -> Self {
        let total_employees = result.root.count_nodes();
        let managers = result.root.iter().filter(|node| !node.is_leaf()).count();
        let non_managerial = total_employees - managers;
        let actual_ratio =
            (managers > 0).then(|| non_managerial as f64 / managers as f64);

        Self {
            model,
            total_employees,
            managers,
            non_managerial,
            actual_ratio,
            levels: result.levels,
        }
    }
}

impl fmt::Display for HierarchySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Model Type: {}", self.model)?;
        writeln!(f, "Total Employees: {}", self.total_employees)?;
        writeln!(f, "Total Managers: {}", self.managers)?;
        writeln!(f, "Non-Managerial Staff: {}", self.non_managerial)?;
        match self.actual_ratio {
            Some(ratio) => writeln!(f, "Actual Manager to Staff Ratio: 1:{:.2}", ratio)?,
            None => writeln!(f, "Actual Manager to Staff Ratio: N/A")?,
        }
        write!(f, "Hierarchy Levels: {}", self.levels)
    }
}
