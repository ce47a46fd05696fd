//! In-memory coordination client

use super::{CoordinationClient, CoordinationError};
use crate::interrupt;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Client operation a scripted failure applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Exists,
    GetData,
}

/// Failure returned in place of a real answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptedFailure {
    /// Behave as if the thread was interrupted mid-wait
    Interrupted,
    /// Behave as if the session dropped
    ConnectionLoss,
}

/// Coordination client backed by a map of node paths
///
/// Nodes are registered up front with [`with_node`](Self::with_node) or
/// [`with_empty_node`](Self::with_empty_node). Every call first consumes the
/// thread interrupt flag, as a blocking client would on entering its wait.
#[derive(Debug, Default)]
pub struct MemoryCoordinationClient {
    nodes: HashMap<String, Option<Vec<u8>>>,
    failures: HashMap<Operation, ScriptedFailure>,
    exists_calls: AtomicUsize,
    get_data_calls: AtomicUsize,
}

impl MemoryCoordinationClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node holding `data`.
    pub fn with_node(mut self, path: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        self.nodes.insert(path.into(), Some(data.into()));
        self
    }

    /// Register a node that exists but carries no data.
    pub fn with_empty_node(mut self, path: impl Into<String>) -> Self {
        self.nodes.insert(path.into(), None);
        self
    }

    /// Make every call of `operation` fail.
    pub fn with_failure(mut self, operation: Operation, failure: ScriptedFailure) -> Self {
        self.failures.insert(operation, failure);
        self
    }

    /// Number of `exists` calls made so far
    pub fn exists_calls(&self) -> usize {
        self.exists_calls.load(Ordering::SeqCst)
    }

    /// Number of `get_data` calls made so far
    pub fn get_data_calls(&self) -> usize {
        self.get_data_calls.load(Ordering::SeqCst)
    }

    fn check(&self, operation: Operation, path: &str) -> Result<(), CoordinationError> {
        if interrupt::take_interrupt() {
            return Err(CoordinationError::Interrupted);
        }
        match self.failures.get(&operation) {
            Some(ScriptedFailure::Interrupted) => Err(CoordinationError::Interrupted),
            Some(ScriptedFailure::ConnectionLoss) => Err(CoordinationError::ConnectionLoss {
                path: path.to_string(),
            }),
            None => Ok(()),
        }
    }
}

impl CoordinationClient for MemoryCoordinationClient {
    fn exists(&self, path: &str, _watch: bool) -> Result<bool, CoordinationError> {
        self.exists_calls.fetch_add(1, Ordering::SeqCst);
        self.check(Operation::Exists, path)?;
        Ok(self.nodes.contains_key(path))
    }

    fn get_data(&self, path: &str, _watch: bool) -> Result<Option<Vec<u8>>, CoordinationError> {
        self.get_data_calls.fetch_add(1, Ordering::SeqCst);
        self.check(Operation::GetData, path)?;
        // A node deleted between `exists` and `get_data` surfaces as a lost
        // read rather than as "no data".
        match self.nodes.get(path) {
            Some(data) => Ok(data.clone()),
            None => Err(CoordinationError::ConnectionLoss {
                path: path.to_string(),
            }),
        }
    }
}
