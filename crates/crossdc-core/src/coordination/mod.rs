//! Coordination service access
//!
//! The resolver only needs two blocking reads from the coordination service:
//! whether a node exists, and the node's data. [`CoordinationClient`] captures
//! exactly that. Two implementations ship with the crate:
//!
//! - [`MemoryCoordinationClient`]: nodes held in memory, with scripted
//!   failures for tests
//! - [`FsCoordinationClient`]: a directory tree standing in for the namespace

mod fs;
mod memory;

pub use fs::FsCoordinationClient;
pub use memory::{MemoryCoordinationClient, Operation, ScriptedFailure};

use std::path::PathBuf;
use thiserror::Error;

/// Coordination service error
#[derive(Debug, Error)]
pub enum CoordinationError {
    /// The calling thread was interrupted while waiting for a reply
    #[error("Interrupted while waiting for the coordination service")]
    Interrupted,

    /// The session to the coordination service was lost
    #[error("Connection lost while reading {path}")]
    ConnectionLoss { path: String },

    /// The path is not a valid node path
    #[error("Invalid node path: {path}")]
    InvalidPath { path: String },

    /// Local I/O failure backing the namespace
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Blocking read access to a coordination service
///
/// Both calls run on the caller's thread and may block. Implementations that
/// block must honour the thread interrupt flag (see [`crate::interrupt`]) by
/// clearing it and returning [`CoordinationError::Interrupted`].
pub trait CoordinationClient {
    /// Returns `true` if a node exists at `path`.
    ///
    /// `watch` asks the service to register a watch on the node; clients that
    /// have no notion of watches ignore it.
    fn exists(&self, path: &str, watch: bool) -> Result<bool, CoordinationError>;

    /// Fetch the data stored at `path`.
    ///
    /// `Ok(None)` means the node carries no data at all, which is distinct
    /// from an empty payload.
    fn get_data(&self, path: &str, watch: bool) -> Result<Option<Vec<u8>>, CoordinationError>;
}

impl<C: CoordinationClient + ?Sized> CoordinationClient for &C {
    fn exists(&self, path: &str, watch: bool) -> Result<bool, CoordinationError> {
        (**self).exists(path, watch)
    }

    fn get_data(&self, path: &str, watch: bool) -> Result<Option<Vec<u8>>, CoordinationError> {
        (**self).get_data(path, watch)
    }
}

impl<C: CoordinationClient + ?Sized> CoordinationClient for Box<C> {
    fn exists(&self, path: &str, watch: bool) -> Result<bool, CoordinationError> {
        (**self).exists(path, watch)
    }

    fn get_data(&self, path: &str, watch: bool) -> Result<Option<Vec<u8>>, CoordinationError> {
        (**self).get_data(path, watch)
    }
}
