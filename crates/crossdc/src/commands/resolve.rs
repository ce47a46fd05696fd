//! Resolve command implementation

use anyhow::{Context, Result};
use clap::Args;
use crossdc_core::config::{ConfigResolver, LocalConfig};
use crossdc_core::Properties;
use serde_json::{json, Map, Value};
use std::path::PathBuf;
use tracing::debug;

use super::NamespaceArgs;

/// Resolve and validate the effective producer configuration
#[derive(Args, Debug)]
pub struct ResolveArgs {
    #[command(flatten)]
    namespace: NamespaceArgs,

    /// Local properties file, applied before any --set pairs
    #[arg(long)]
    local: Option<PathBuf>,

    /// Local setting (repeatable, later pairs win)
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_pair)]
    set: Vec<(String, String)>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

fn parse_pair(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}

/// Build the local configuration from the file and the --set pairs
fn local_config(args: &ResolveArgs) -> Result<LocalConfig> {
    let mut config = LocalConfig::new();

    if let Some(path) = &args.local {
        let bytes =
            std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        let props = Properties::parse(&bytes)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        debug!("Loaded {} local settings from {}", props.len(), path.display());
        for (key, value) in props.iter() {
            config.insert(key.to_string(), Value::String(value.to_string()));
        }
    }

    for (key, value) in &args.set {
        config.insert(key.clone(), Value::String(value.clone()));
    }

    Ok(config)
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Execute the resolve command
pub fn execute(args: ResolveArgs) -> Result<()> {
    let mut config = local_config(&args)?;

    let resolver =
        ConfigResolver::new(args.namespace.client()).with_options(args.namespace.options());
    let report = resolver.resolve(&mut config)?;

    let source_of = |key: &str| if report.is_filled(key) { "remote" } else { "local" };

    if args.json {
        let sources: Map<String, Value> = config
            .keys()
            .map(|key| (key.clone(), Value::from(source_of(key.as_str()))))
            .collect();
        let output = json!({
            "path": report.path,
            "remotePresent": report.remote_present,
            "config": config,
            "sources": sources,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let node_state = if report.remote_present {
            "node present"
        } else {
            "no node"
        };
        println!("Resolved from {} ({node_state})", report.path);
        println!();
        for (key, value) in &config {
            println!("  {key} = {} ({})", display_value(value), source_of(key.as_str()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pair() {
        assert_eq!(
            parse_pair("topicName=events").unwrap(),
            ("topicName".to_string(), "events".to_string())
        );
        assert_eq!(
            parse_pair("bootstrapServers=a:1,b:2").unwrap(),
            ("bootstrapServers".to_string(), "a:1,b:2".to_string())
        );
        assert_eq!(parse_pair("empty=").unwrap(), ("empty".to_string(), String::new()));
        assert!(parse_pair("novalue").is_err());
        assert!(parse_pair("=value").is_err());
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&json!("events")), "events");
        assert_eq!(display_value(&json!(5)), "5");
        assert_eq!(display_value(&json!({"a": 1})), r#"{"a":1}"#);
    }
}
