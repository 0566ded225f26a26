//! Error types for refresh rate queries.

use thiserror::Error;

/// Result type alias for vsync-rate operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving a display's refresh rate.
///
/// The C ABI boundary collapses every variant into the `-1.0` sentinel; Rust
/// callers get the distinct cause.
#[derive(Debug, Error)]
pub enum Error {
    /// The legacy device enumeration has no entry at this index.
    #[error("no display device at monitor index {0}")]
    MonitorNotFound(i64),

    /// The device exists but its current mode could not be read.
    #[error("current display mode unavailable for {0}")]
    ModeUnavailable(String),

    /// The buffer size probe returned a non-success status.
    #[error("display config buffer size probe failed with status {0}")]
    ProbeFailed(u32),

    /// A display config table could not be allocated.
    #[error("failed to allocate {table} table with {len} entries")]
    AllocationFailed {
        /// Which table ("path" or "mode").
        table: &'static str,
        /// Requested number of entries.
        len: u32,
    },

    /// The populate query returned a non-success status.
    #[error("display config query failed with status {0}")]
    QueryFailed(u32),

    /// No active path has the same position and resolution as the monitor.
    #[error("no active display path matches monitor index {0}")]
    NoMatch(i64),

    /// The matched path reports a rate that cannot be turned into Hz.
    #[error("invalid refresh rate {numerator}/{denominator}")]
    InvalidRefreshRate {
        /// Rate numerator.
        numerator: u32,
        /// Rate denominator.
        denominator: u32,
    },

    /// The display configuration API is not available on this platform.
    #[error("not supported: {0}")]
    NotSupported(String),
}
