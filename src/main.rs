use clap::Parser;
use godbolt_mcp::utils::error::ErrorSeverity;
use godbolt_mcp::utils::{logger, validation::Validate};
use godbolt_mcp::{CliConfig, GodboltError, GodboltServer, HttpCompilerExplorer, ServerConfig};
use std::sync::Arc;

fn exit_with(e: &GodboltError) -> ! {
    tracing::error!(
        "❌ Startup failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());

    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

fn load_config(cli: &CliConfig) -> Result<ServerConfig, GodboltError> {
    let config = cli.resolve()?;
    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            logger::init_logger(cli.verbose, cli.log_json, None);
            exit_with(&e);
        }
    };

    logger::init_logger(config.verbose, config.log_json, config.log_level.as_deref());
    tracing::info!("Starting godbolt-mcp against {}", config.base_url);
    tracing::debug!("Server config: {:?}", config);

    let explorer = match HttpCompilerExplorer::new(&config) {
        Ok(explorer) => explorer,
        Err(e) => exit_with(&e),
    };
    let server = GodboltServer::new(Arc::new(explorer));

    let transport = rmcp::transport::io::stdio();
    let service = rmcp::serve_server(server, transport).await?;
    tracing::info!("✅ MCP server ready on stdio");
    service.waiting().await?;

    tracing::info!("Client disconnected, shutting down");
    Ok(())
}
