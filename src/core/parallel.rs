//! Parallel processing utilities
//!
//! Every stage of the alias pipeline is a fan-out over independent
//! filesystem operations followed by a fan-in of their results.

use crate::error::Result;
use rayon::prelude::*;

/// Execute a function in parallel on a collection of items
pub fn parallel_process<T, F, R>(items: Vec<T>, f: F) -> Vec<R>
where
    T: Send,
    R: Send,
    F: Fn(T) -> R + Send + Sync,
{
    items.into_par_iter().map(f).collect()
}

/// Execute a function in parallel on a collection of items with error handling.
///
/// Every item is attempted; the first error encountered is returned.
pub fn parallel_process_with_errors<T, F, R>(items: Vec<T>, f: F) -> Result<Vec<R>>
where
    T: Send,
    R: Send,
    F: Fn(T) -> Result<R> + Send + Sync,
{
    let results: Vec<Result<R>> = items.into_par_iter().map(f).collect();
    results.into_iter().collect()
}
