//! Intersection over union per label value

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{EvalError, Result};

/// Intersection over union for every value present in either sequence
///
/// For each value `v`, the intersection counts positions where both
/// sequences equal `v` and the union counts positions where at least one
/// does. Every key comes from the data, so the union is never zero.
///
/// # Example
///
/// ```
/// use labelscope::eval::intersection_over_union;
///
/// let iou = intersection_over_union(&[1, 1, 0], &[1, 0, 0])?;
/// assert_eq!(iou[&0], 0.5);
/// assert_eq!(iou[&1], 0.5);
/// # Ok::<(), labelscope::EvalError>(())
/// ```
pub fn intersection_over_union(a: &[usize], b: &[usize]) -> Result<BTreeMap<usize, f64>> {
    if a.len() != b.len() {
        return Err(EvalError::LengthMismatch {
            left: "first sequence",
            left_len: a.len(),
            right: "second sequence",
            right_len: b.len(),
        });
    }

    let values: BTreeSet<usize> = a.iter().chain(b.iter()).copied().collect();
    let iou = values
        .into_iter()
        .map(|v| {
            let (intersection, union) = a.iter().zip(b.iter()).fold((0usize, 0usize), |(i, u), (&x, &y)| {
                (i + usize::from(x == v && y == v), u + usize::from(x == v || y == v))
            });
            (v, intersection as f64 / union as f64)
        })
        .collect();

    Ok(iou)
}
