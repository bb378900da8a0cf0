//! Domain-level errors (hierarchy generation and parameter validation)

use thiserror::Error;

use crate::domain::params::Model;

/// Errors raised while selecting a model, validating parameters, or
/// generating a hierarchy. All are fatal to the call and are raised
/// before (or instead of) returning a partial tree.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// A string tag did not match any known [`Model`].
    #[error("unknown model: {0}")]
    UnknownModel(String),

    /// Up-front validation rejected the generation parameters.
    #[error("invalid parameters for model {model}: {reason}")]
    InvalidParams { model: Model, reason: String },

    /// `distribute` was asked to split across zero buckets.
    #[error("cannot distribute across zero buckets")]
    EmptyBuckets,
}

/// Result type for domain operations.
pub type GenResult<T> = Result<T, GenerationError>;
