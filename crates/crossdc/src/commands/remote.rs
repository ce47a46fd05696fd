//! Remote command implementation

use anyhow::Result;
use clap::Args;
use crossdc_core::config::{props_path, ConfigResolver};
use serde_json::json;

use super::NamespaceArgs;

/// Show the remote properties node without validating
#[derive(Args, Debug)]
pub struct RemoteArgs {
    #[command(flatten)]
    namespace: NamespaceArgs,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Execute the remote command
pub fn execute(args: RemoteArgs) -> Result<()> {
    let path = props_path(&args.namespace.options());
    let resolver = ConfigResolver::new(args.namespace.client());
    let remote = resolver.fetch_remote(&path)?;

    if args.json {
        let output = json!({
            "path": path,
            "present": remote.is_some(),
            "properties": remote,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match remote {
        Some(props) if props.is_empty() => println!("{path}: node present, no properties"),
        Some(props) => {
            println!("{path}:");
            for (key, value) in props.iter() {
                println!("  {key} = {value}");
            }
        }
        None => println!("{path}: no node"),
    }

    Ok(())
}
