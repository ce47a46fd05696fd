//! Producer configuration resolution

use super::error::ResolveError;
use super::keys::REQUIRED_KEYS;
use super::path::{props_path, ResolverOptions};
use super::types::{is_unset, LocalConfig};
use crate::coordination::{CoordinationClient, CoordinationError};
use crate::diagnostics::{Diagnostics, Failure, TracingDiagnostics};
use crate::interrupt;
use crate::properties::Properties;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Outcome of a successful resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionReport {
    /// Coordination-service path that was consulted
    pub path: String,
    /// Whether a remote node existed at `path`
    pub remote_present: bool,
    /// Keys copied from the remote node, in key order
    pub filled: Vec<String>,
}

impl ResolutionReport {
    /// Returns `true` if `key` was filled from the remote node.
    pub fn is_filled(&self, key: &str) -> bool {
        self.filled.iter().any(|filled| filled == key)
    }
}

/// Resolves producer configuration against a coordination service
///
/// Resolution is a single blocking pass on the caller's thread:
/// 1. Check whether the properties node exists
/// 2. If it does, fetch and parse it, then copy every remote key that is
///    unset locally
/// 3. Require every key in [`REQUIRED_KEYS`] to be set
///
/// Nothing is retried and nothing is cached between calls.
pub struct ConfigResolver<C> {
    client: C,
    options: ResolverOptions,
    diagnostics: Box<dyn Diagnostics>,
}

impl<C: CoordinationClient> ConfigResolver<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            options: ResolverOptions::default(),
            diagnostics: Box::new(TracingDiagnostics),
        }
    }

    pub fn with_options(mut self, options: ResolverOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the default tracing sink for failure reports.
    pub fn with_diagnostics(mut self, diagnostics: impl Diagnostics + 'static) -> Self {
        self.diagnostics = Box::new(diagnostics);
        self
    }

    /// Resolve `config` in place.
    ///
    /// On success every required key holds a non-null value and only keys
    /// that were unset have been added. On failure `config` may already
    /// contain remote values if the failure is a validation error; in every
    /// other case it is untouched.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::Integrity`] if the node exists but has no data
    /// - [`ResolveError::ServiceUnavailable`] if the wait was interrupted; the
    ///   thread interrupt flag is set again before returning
    /// - [`ResolveError::Resolution`] for any other client or parse failure
    /// - [`ResolveError::Validation`] naming the first required key still unset
    pub fn resolve(&self, config: &mut LocalConfig) -> Result<ResolutionReport, ResolveError> {
        let path = props_path(&self.options);
        debug!("Resolving crossdc configuration from {path}");

        let remote = match self.fetch_remote(&path) {
            Ok(remote) => remote,
            Err(err) => return Err(self.fail(err, &path, config, None)),
        };

        let filled = match &remote {
            Some(remote) => overlay_missing(config, remote),
            None => Vec::new(),
        };

        if let Err(err) = validate_required(config) {
            return Err(self.fail(err, &path, config, remote.as_ref()));
        }

        Ok(ResolutionReport {
            path,
            remote_present: remote.is_some(),
            filled,
        })
    }

    /// Fetch and parse the remote node, `None` if it does not exist.
    ///
    /// Failures are not passed to the diagnostics sink here; only
    /// [`resolve`](Self::resolve) reports.
    pub fn fetch_remote(&self, path: &str) -> Result<Option<Properties>, ResolveError> {
        let exists = self
            .client
            .exists(path, true)
            .map_err(|err| client_failure(path, err))?;
        if !exists {
            debug!("No crossdc configuration node at {path}");
            return Ok(None);
        }

        let data = self
            .client
            .get_data(path, true)
            .map_err(|err| client_failure(path, err))?
            .ok_or_else(|| ResolveError::Integrity {
                path: path.to_string(),
            })?;

        let remote = Properties::parse(&data).map_err(|source| ResolveError::Resolution {
            path: path.to_string(),
            source: source.into(),
        })?;
        debug!("Read {} crossdc properties from {path}", remote.len());
        Ok(Some(remote))
    }

    fn fail(
        &self,
        error: ResolveError,
        path: &str,
        local: &LocalConfig,
        remote: Option<&Properties>,
    ) -> ResolveError {
        self.diagnostics.report(&Failure {
            error: &error,
            path,
            local,
            remote,
        });
        error
    }
}

/// Map a client error, restoring the interrupt flag the client consumed.
fn client_failure(path: &str, err: CoordinationError) -> ResolveError {
    match err {
        CoordinationError::Interrupted => {
            interrupt::interrupt_current();
            ResolveError::ServiceUnavailable {
                path: path.to_string(),
                source: CoordinationError::Interrupted,
            }
        }
        other => ResolveError::Resolution {
            path: path.to_string(),
            source: other.into(),
        },
    }
}

/// Copy every remote entry whose key is unset in `config`.
///
/// Returns the keys that were copied. Values already present and non-null
/// are never overwritten.
pub fn overlay_missing(config: &mut LocalConfig, remote: &Properties) -> Vec<String> {
    let mut filled = Vec::new();
    for (key, value) in remote.iter() {
        if is_unset(config, key) {
            config.insert(key.to_string(), Value::String(value.to_string()));
            filled.push(key.to_string());
        }
    }
    if !filled.is_empty() {
        debug!("Filled {} keys from remote configuration", filled.len());
    }
    filled
}

/// Require every key in [`REQUIRED_KEYS`] to be set.
pub fn validate_required(config: &LocalConfig) -> Result<(), ResolveError> {
    match REQUIRED_KEYS.into_iter().find(|key| is_unset(config, key)) {
        Some(key) => Err(ResolveError::Validation { key }),
        None => Ok(()),
    }
}

/// Resolve `config` with default options and tracing diagnostics.
///
/// ```
/// use crossdc_core::config::{fill_properties, LocalConfig};
/// use crossdc_core::coordination::MemoryCoordinationClient;
/// use crossdc_core::ErrorKind;
///
/// let client = MemoryCoordinationClient::new();
/// let mut config = LocalConfig::new();
/// config.insert("bootstrapServers".into(), "kafka:9092".into());
///
/// let err = fill_properties(&client, &mut config).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Validation);
/// assert_eq!(err.to_string(), "topicName not specified for producer");
/// ```
pub fn fill_properties<C: CoordinationClient>(
    client: C,
    config: &mut LocalConfig,
) -> Result<(), ResolveError> {
    ConfigResolver::new(client).resolve(config).map(|_| ())
}
