use thiserror::Error;

/// Failures that are contract violations by the caller, not ordinary
/// search-time outcomes. A search that simply fails to find a solution is
/// reported as [`crate::search::SearchResult::ProvablyUnsolvable`], never
/// through this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopSpinError {
    #[error(
        "permutation {permutation:?} is not a permutation of 1..={n} \
         (duplicate or out-of-range value)"
    )]
    InvalidPermutation { n: usize, permutation: Vec<u16> },

    #[error("window size k={k} must satisfy 2 <= k <= n={n}")]
    InvalidWindowSize { n: usize, k: usize },
}
