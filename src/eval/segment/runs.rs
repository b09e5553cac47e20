//! Run-length distributions

use std::collections::BTreeMap;

use crate::error::{EvalError, Result};

/// Lengths of maximal runs of identical values, keyed by value
///
/// Every integer in `0..=max(labels)` gets an entry, empty when the value
/// never occurs. Run lengths are listed in sequence order.
///
/// # Errors
///
/// [`EvalError::EmptyInput`] for an empty sequence, whose maximum is undefined.
///
/// # Example
///
/// ```
/// use labelscope::eval::run_lengths;
///
/// let runs = run_lengths(&[1, 1, 1, 0, 0, 4, 4, 4, 4, 4, 4, 0, 1, 1, 1, 1])?;
/// assert_eq!(runs[&0], vec![2, 1]);
/// assert_eq!(runs[&1], vec![3, 4]);
/// assert!(runs[&2].is_empty());
/// assert_eq!(runs[&4], vec![6]);
/// # Ok::<(), labelscope::EvalError>(())
/// ```
pub fn run_lengths(labels: &[usize]) -> Result<BTreeMap<usize, Vec<usize>>> {
    let max = *labels.iter().max().ok_or(EvalError::EmptyInput {
        operation: "run_lengths",
    })?;

    let mut runs: BTreeMap<usize, Vec<usize>> = (0..=max).map(|v| (v, Vec::new())).collect();
    for run in labels.chunk_by(|x, y| x == y) {
        runs.entry(run[0]).or_default().push(run.len());
    }

    Ok(runs)
}
