//! Filesystem-backed coordination client
//!
//! Mirrors the coordination namespace onto a directory tree so configuration
//! can be staged and inspected without a running service:
//!
//! ```text
//! <root>/crossdc.properties   node /crossdc.properties with data
//! <root>/solr/                node /solr without data
//! ```

use super::{CoordinationClient, CoordinationError};
use crate::interrupt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Coordination client rooted at a local directory
#[derive(Debug, Clone)]
pub struct FsCoordinationClient {
    root: PathBuf,
}

impl FsCoordinationClient {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a node path onto the filesystem.
    ///
    /// Node paths are absolute and may not contain `.` or `..` segments, so a
    /// node can never resolve outside the root.
    fn node_path(&self, path: &str) -> Result<PathBuf, CoordinationError> {
        let invalid = || CoordinationError::InvalidPath {
            path: path.to_string(),
        };

        let relative = path.strip_prefix('/').ok_or_else(invalid)?;
        let mut resolved = self.root.clone();
        for segment in relative.split('/').filter(|s| !s.is_empty()) {
            if segment == "." || segment == ".." {
                return Err(invalid());
            }
            resolved.push(segment);
        }
        Ok(resolved)
    }

    fn check_interrupt() -> Result<(), CoordinationError> {
        if interrupt::take_interrupt() {
            return Err(CoordinationError::Interrupted);
        }
        Ok(())
    }
}

impl CoordinationClient for FsCoordinationClient {
    fn exists(&self, path: &str, _watch: bool) -> Result<bool, CoordinationError> {
        Self::check_interrupt()?;
        let node = self.node_path(path)?;
        node.try_exists()
            .map_err(|source| CoordinationError::Io { path: node, source })
    }

    fn get_data(&self, path: &str, _watch: bool) -> Result<Option<Vec<u8>>, CoordinationError> {
        Self::check_interrupt()?;
        let node = self.node_path(path)?;

        let metadata = std::fs::metadata(&node).map_err(|source| CoordinationError::Io {
            path: node.clone(),
            source,
        })?;
        if metadata.is_dir() {
            debug!("Node {path} is a directory, treating as dataless");
            return Ok(None);
        }

        std::fs::read(&node)
            .map(Some)
            .map_err(|source| CoordinationError::Io { path: node, source })
    }
}
