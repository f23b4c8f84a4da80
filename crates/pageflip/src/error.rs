#![forbid(unsafe_code)]

//! Error types for flip validation.

use thiserror::Error;

/// Why a flip request was rejected.
///
/// All variants are detected synchronously inside
/// [`FlipEffect::flip`](crate::FlipEffect::flip) before anything is
/// allocated; a rejected call has no side effects beyond the `error()`
/// notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FlipError {
    /// One or both panel handles were absent.
    #[error("cannot animate: a panel handle is missing")]
    MissingPanel,
    /// Outgoing and incoming are the same handle.
    #[error("cannot animate: outgoing and incoming are the same panel")]
    IdenticalPanels,
    /// One or both panels are not currently visible.
    #[error("cannot animate: a panel is not visible")]
    HiddenPanel,
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, FlipError>;
