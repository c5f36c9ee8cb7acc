//! Algorithm enum for selecting the generation implementation.
//!
//! Both variants compute identical generations; they differ only in how the
//! candidate cells are evaluated.

/// Available generation algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Candidate cells evaluated one after another
    #[default]
    Sparse,
    /// Candidate cells evaluated on the rayon thread pool
    SparseParallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Sparse, Algorithm::SparseParallel]
    }

    /// Display name for UI
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Sparse => "Sparse",
            Algorithm::SparseParallel => "Sparse+Par",
        }
    }

    /// Short description for tooltips/info
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Sparse => "Serial",
            Algorithm::SparseParallel => "Parallel (rayon)",
        }
    }
}
