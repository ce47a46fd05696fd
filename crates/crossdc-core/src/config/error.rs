//! Resolution errors

use crate::coordination::CoordinationError;
use crate::properties::PropertiesError;
use thiserror::Error;

/// Coarse classification of a [`ResolveError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Remote node exists but carries no data
    Integrity,
    /// The wait on the coordination service was interrupted
    ServiceUnavailable,
    /// Any other failure while checking, fetching or parsing
    Resolution,
    /// A required key is still unset after the overlay
    Validation,
}

impl ErrorKind {
    /// HTTP-style status code reported to the hosting server.
    pub fn code(self) -> u16 {
        match self {
            ErrorKind::ServiceUnavailable => 503,
            ErrorKind::Integrity | ErrorKind::Resolution | ErrorKind::Validation => 500,
        }
    }
}

/// Underlying cause of [`ResolveError::Resolution`]
#[derive(Debug, Error)]
pub enum ResolutionCause {
    /// The coordination service call failed
    #[error(transparent)]
    Coordination(#[from] CoordinationError),

    /// The remote payload is not valid properties text
    #[error(transparent)]
    Parse(#[from] PropertiesError),
}

/// Fatal producer configuration error
///
/// None of these are retried; the caller is expected to abort producer
/// startup.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Remote node exists but fetching it returned no data
    #[error("{path} node in the coordination service has no data")]
    Integrity { path: String },

    /// Interrupted while waiting on the coordination service
    #[error("Interrupted looking for crossdc configuration at {path}")]
    ServiceUnavailable {
        path: String,
        #[source]
        source: CoordinationError,
    },

    /// Existence check, fetch or parse failed
    #[error("Failed looking for crossdc configuration at {path}: {source}")]
    Resolution {
        path: String,
        #[source]
        source: ResolutionCause,
    },

    /// Required key missing after overlay
    #[error("{key} not specified for producer")]
    Validation { key: &'static str },
}

impl ResolveError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ResolveError::Integrity { .. } => ErrorKind::Integrity,
            ResolveError::ServiceUnavailable { .. } => ErrorKind::ServiceUnavailable,
            ResolveError::Resolution { .. } => ErrorKind::Resolution,
            ResolveError::Validation { .. } => ErrorKind::Validation,
        }
    }

    /// Shorthand for `self.kind().code()`
    pub fn code(&self) -> u16 {
        self.kind().code()
    }
}
