//! Even integer distribution across buckets.

use tracing::instrument;

use crate::domain::error::{GenResult, GenerationError};

/// Splits `items` across `buckets` as evenly as possible.
///
/// Each bucket receives `items / buckets`; the first `items % buckets`
/// buckets get one extra. The returned counts sum to `items`.
///
/// # Errors
/// [`GenerationError::EmptyBuckets`] if `buckets` is 0; callers must
/// guarantee at least one bucket.
#[instrument(level = "trace")]
pub fn distribute(items: usize, buckets: usize) -> GenResult<Vec<usize>> {
    if buckets == 0 {
        return Err(GenerationError::EmptyBuckets);
    }
    let base = items / buckets;
    let extra = items % buckets;
    Ok((0..buckets)
        .map(|index| if index < extra { base + 1 } else { base })
        .collect())
}
