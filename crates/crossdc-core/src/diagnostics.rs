//! Failure reporting for configuration resolution
//!
//! The resolver reports every failure exit exactly once through an injected
//! [`Diagnostics`] sink before returning the error. Successful resolutions
//! report nothing.

use crate::config::{LocalConfig, ResolveError};
use crate::properties::Properties;
use tracing::error;

/// Everything known at the moment resolution failed
#[derive(Debug)]
pub struct Failure<'a> {
    /// The error about to be returned
    pub error: &'a ResolveError,
    /// Coordination-service path that was consulted
    pub path: &'a str,
    /// Local configuration as it stood at the failure point
    pub local: &'a LocalConfig,
    /// Remote configuration, if it was fetched and parsed
    pub remote: Option<&'a Properties>,
}

/// Sink for resolution failures
pub trait Diagnostics: Send + Sync {
    fn report(&self, failure: &Failure<'_>);
}

/// Default sink: one `tracing` error event per failure
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&self, failure: &Failure<'_>) {
        let props = serde_json::to_string(failure.local).unwrap_or_default();
        let remote_props = failure
            .remote
            .and_then(|remote| serde_json::to_string(remote).ok())
            .unwrap_or_else(|| "null".to_string());

        error!(
            path = failure.path,
            kind = ?failure.error.kind(),
            props = %props,
            remote_props = %remote_props,
            "Crossdc configuration resolution failed: {}",
            failure.error
        );
    }
}
