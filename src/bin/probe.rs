//! Connectivity check: asks the configured Compiler Explorer for its version
//! and language list using the same configuration as the server.

use clap::Parser;
use godbolt_mcp::utils::{logger, validation::Validate};
use godbolt_mcp::{CliConfig, CompilerExplorer, HttpCompilerExplorer, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = CliConfig::parse();
    let config = cli.resolve()?;
    logger::init_logger(config.verbose, config.log_json, config.log_level.as_deref());

    config.validate()?;
    let explorer = HttpCompilerExplorer::new(&config)?;
    println!("🚀 Probing {}", explorer.base_url());

    let version = explorer.version().await?;
    println!("✅ Version: {}", version.trim());

    let languages = explorer.languages().await?;
    let ids: Vec<&str> = languages
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.get("id").and_then(|id| id.as_str()))
                .collect()
        })
        .unwrap_or_default();
    println!("📋 {} languages: {}", ids.len(), ids.join(", "));

    Ok(())
}
