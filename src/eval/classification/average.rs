//! Averaging strategies for per-class metrics

/// Averaging strategy for per-class metrics
///
/// Undefined (NaN) entries are skipped by every strategy, so classes with no
/// ground-truth support do not drag an average towards zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Average {
    /// Unweighted mean over defined classes
    Macro,
    /// Mean weighted by support over defined classes
    Weighted,
}
