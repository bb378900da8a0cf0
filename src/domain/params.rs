//! Model selection and generation parameters.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::{GenResult, GenerationError};

/// The closed set of hierarchy models.
///
/// Callers holding a string tag (config files, UIs) parse it with
/// [`FromStr`]; anything outside the set fails before any tree is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Model {
    FixedLevels,
    Flexible,
    Strict,
}

impl FromStr for Model {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fixedLevels" => Ok(Model::FixedLevels),
            "flexible" => Ok(Model::Flexible),
            "strict" => Ok(Model::Strict),
            other => Err(GenerationError::UnknownModel(other.to_string())),
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Model::FixedLevels => "fixedLevels",
            Model::Flexible => "flexible",
            Model::Strict => "strict",
        };
        write!(f, "{}", tag)
    }
}

/// Model-specific generation parameters.
///
/// `total` always includes the root node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationParams {
    /// Exact level count; `max_reports` bounds the ideal per-level targets
    FixedLevels {
        total: usize,
        levels: usize,
        max_reports: usize,
    },
    /// Greedy growth towards `ratio` children per parent within `min`/`max`
    Flexible {
        total: usize,
        ratio: usize,
        min: usize,
        max: usize,
    },
    /// Uniform `ratio`-ary tree, last level truncated to fit
    Strict { total: usize, ratio: usize },
}

impl GenerationParams {
    pub fn model(&self) -> Model {
        match self {
            GenerationParams::FixedLevels { .. } => Model::FixedLevels,
            GenerationParams::Flexible { .. } => Model::Flexible,
            GenerationParams::Strict { .. } => Model::Strict,
        }
    }

    pub fn total(&self) -> usize {
        match *self {
            GenerationParams::FixedLevels { total, .. }
            | GenerationParams::Flexible { total, .. }
            | GenerationParams::Strict { total, .. } => total,
        }
    }

    /// Rejects degenerate parameters before any construction begins.
    pub fn validate(&self) -> GenResult<()> {
        let fail = |reason: &str| {
            Err(GenerationError::InvalidParams {
                model: self.model(),
                reason: reason.to_string(),
            })
        };

        if self.total() == 0 {
            return fail("total must be at least 1");
        }

        match *self {
            GenerationParams::FixedLevels {
                levels, max_reports, ..
            } => {
                if levels == 0 {
                    return fail("levels must be at least 1");
                }
                if max_reports == 0 {
                    return fail("maxReports must be at least 1");
                }
            }
            GenerationParams::Flexible {
                ratio, min, max, ..
            } => {
                if ratio == 0 {
                    return fail("ratio must be at least 1");
                }
                if max == 0 {
                    return fail("max must be at least 1");
                }
                if min > max {
                    return fail("min must not exceed max");
                }
            }
            // ratio 0 is allowed: the reconciler attaches the remainder
            GenerationParams::Strict { .. } => {}
        }

        Ok(())
    }
}
