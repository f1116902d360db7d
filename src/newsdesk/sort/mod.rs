//! # Sort Engine
//!
//! Two strategies for ordering the array store by publication year, both
//! keyed by the extracted year with malformed dates (year 0) first:
//!
//! - [`quick`]: in-place quicksort, not stable. Fastest on shuffled input,
//!   quadratic on adversarial input.
//! - [`merge`]: top-down merge sort with temporary buffers, stable — articles
//!   sharing a year keep their loaded order.
//!
//! The linked store always uses its own merge sort
//! ([`LinkedStore::sort_by_year`](crate::store::linked::LinkedStore::sort_by_year));
//! quicksort's index arithmetic has no chain equivalent here.

use crate::store::array::ArrayStore;

pub mod merge;
pub mod quick;

/// Array sorting strategy. Only [`SortAlgorithm::Merge`] guarantees that
/// articles with equal years keep their relative order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortAlgorithm {
    Quick,
    Merge,
}

impl SortAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            SortAlgorithm::Quick => "quicksort",
            SortAlgorithm::Merge => "merge sort",
        }
    }
}

/// Sort the array store by year with the chosen strategy.
pub fn sort_array(store: &mut ArrayStore, algorithm: SortAlgorithm) {
    match algorithm {
        SortAlgorithm::Quick => quick::sort(store.as_mut_slice()),
        SortAlgorithm::Merge => merge::sort(store.as_mut_slice()),
    }
}
