//! Common error types used across all Overmap crates
//! Provides consistent error handling and reporting

use thiserror::Error;

/// Base error type for all Overmap operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OvermapError {
    /// A static-data lookup that must always resolve failed to match any
    /// known case. Indicates a stale game data mapping; never defaulted.
    #[error("inconsistent game data in {sheet} for key {key}: {detail}")]
    DataInconsistency {
        sheet: &'static str,
        key: u32,
        detail: String,
    },

    /// The teleport capability was invoked and declined the request.
    #[error("teleport to {destination} was rejected")]
    TeleportRejected { destination: String },

    /// The teleport capability is not installed at all. Kept distinct from
    /// [`OvermapError::TeleportRejected`] so the user-facing message can
    /// point at the missing dependency.
    #[error("teleport capability is not available")]
    TeleportUnavailable,
}

/// Result type alias for Overmap operations
pub type OvermapResult<T> = Result<T, OvermapError>;
