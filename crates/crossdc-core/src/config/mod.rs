//! Producer configuration resolution
//!
//! Resolves the producer configuration from two sources with priority:
//! 1. Local settings supplied by the caller
//! 2. The properties node in the coordination service
//!
//! After the overlay every key in [`keys::REQUIRED_KEYS`] must hold a
//! non-null value, otherwise resolution fails.

mod error;
pub mod keys;
mod path;
mod resolve;
mod types;

pub use error::{ErrorKind, ResolutionCause, ResolveError};
pub use path::{props_path, ResolverOptions};
pub use resolve::{
    fill_properties, overlay_missing, validate_required, ConfigResolver, ResolutionReport,
};
pub use types::{is_unset, LocalConfig};
