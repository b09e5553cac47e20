//! Segment-level statistics for label sequences
//!
//! Both functions work on whatever label values are present; no class count
//! is declared up front.

mod iou;
mod runs;

#[cfg(test)]
mod tests;

pub use iou::intersection_over_union;
pub use runs::run_lengths;
