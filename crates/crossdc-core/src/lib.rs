//! Core configuration resolution for the crossdc replication producer
//!
//! Before the producer can construct its messaging client it needs a
//! configuration containing at least `bootstrapServers` and `topicName`.
//! Those values may be supplied locally by the caller, or published centrally
//! as a properties node in the coordination service. This crate merges the
//! two (local settings always win) and validates the result.
//!
//! ```
//! use crossdc_core::config::{fill_properties, LocalConfig};
//! use crossdc_core::coordination::MemoryCoordinationClient;
//!
//! let client = MemoryCoordinationClient::new().with_node(
//!     "/crossdc.properties",
//!     b"bootstrapServers=kafka:9092\ntopicName=events\n".to_vec(),
//! );
//!
//! let mut config = LocalConfig::new();
//! fill_properties(&client, &mut config).unwrap();
//! assert_eq!(config["topicName"], "events");
//! ```

pub mod config;
pub mod coordination;
pub mod diagnostics;
pub mod interrupt;
pub mod logging;
pub mod properties;

pub use config::{fill_properties, ConfigResolver, ErrorKind, LocalConfig, ResolveError};
pub use coordination::{CoordinationClient, CoordinationError};
pub use properties::Properties;
