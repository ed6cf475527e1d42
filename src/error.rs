//! Error types for the Attendance Engine.
//!
//! The pure calculation functions never fail; these errors come from
//! configuration loading and from the data sources polled by the refresh loop.

use thiserror::Error;

/// The main error type for the Attendance Engine.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/schedule.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/schedule.yaml");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds a value outside its allowed range.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// A remote data source could not be reached.
    #[error("Data source '{source_name}' unavailable: {message}")]
    SourceUnavailable {
        /// Name of the source (e.g. "attendance").
        source_name: String,
        /// Transport-level description of the failure.
        message: String,
    },

    /// A remote data source answered with a non-success status.
    #[error("Data source '{source_name}' rejected the request with status {status}")]
    SourceRejected {
        /// Name of the source.
        source_name: String,
        /// The status code returned.
        status: u16,
    },

    /// A fetch was requested while another one for the same loop is pending.
    #[error("A fetch is already in flight for view '{view}'")]
    FetchInFlight {
        /// The view owning the refresh loop.
        view: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
