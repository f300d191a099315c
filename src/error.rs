//! Error types for grid construction.

use thiserror::Error;

/// Errors raised while building a [`crate::grid::Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// Dimensions or mine count outside the supported range.
    #[error("invalid grid config: {width}x{height} with {mines} mines")]
    InvalidConfig {
        width: usize,
        height: usize,
        mines: usize,
    },
}
