//! CLI command dispatch and execution

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use crossdc_core::config::ResolverOptions;
use crossdc_core::coordination::FsCoordinationClient;
use std::path::PathBuf;

mod remote;
mod resolve;

/// crossdc - Producer configuration resolution
#[derive(Parser, Debug)]
#[command(
    name = "crossdc",
    version,
    about = "Resolve crossdc producer configuration",
    long_about = "Merge local producer settings with the crossdc properties node of a staged coordination namespace and validate the result"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve and validate the effective producer configuration
    Resolve(resolve::ResolveArgs),

    /// Show the remote properties node without validating
    Remote(remote::RemoteArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Resolve(args) => resolve::execute(args),
            Commands::Remote(args) => remote::execute(args),
        }
    }
}

/// Arguments locating the coordination namespace
#[derive(Args, Debug)]
struct NamespaceArgs {
    /// Directory standing in for the coordination namespace root
    #[arg(long)]
    root: PathBuf,

    /// Node path of the properties (default: $CROSSDC_PROPS_PATH or /crossdc.properties)
    #[arg(long)]
    path: Option<String>,
}

impl NamespaceArgs {
    fn client(&self) -> FsCoordinationClient {
        FsCoordinationClient::new(self.root.clone())
    }

    fn options(&self) -> ResolverOptions {
        ResolverOptions {
            props_path: self.path.clone(),
        }
    }
}
