pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use toml_config::TomlConfig;

pub const DEFAULT_BASE_URL: &str = "https://godbolt.org";
pub const MAX_TIMEOUT_SECONDS: u64 = 600;

#[derive(Debug, Clone, Parser)]
#[command(name = "godbolt-mcp")]
#[command(about = "MCP server for the Compiler Explorer API (stdio transport)")]
#[command(version)]
pub struct CliConfig {
    #[arg(long, env = "GODBOLT_CONFIG", help = "Optional TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, env = "GODBOLT_BASE_URL", help = "Compiler Explorer base URL")]
    pub base_url: Option<String>,

    #[arg(long, env = "GODBOLT_TIMEOUT_SECONDS", help = "Upstream request timeout")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, env = "GODBOLT_USER_AGENT", help = "User-Agent sent upstream")]
    pub user_agent: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

/// Effective settings after layering defaults, the TOML file and CLI/env.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
    pub user_agent: String,
    pub log_level: Option<String>,
    pub log_json: bool,
    pub verbose: bool,
}

pub fn default_user_agent() -> String {
    format!("godbolt-mcp/{}", env!("CARGO_PKG_VERSION"))
}

impl CliConfig {
    /// 合併 TOML 檔案與命令列參數，命令列優先
    pub fn resolve(&self) -> Result<ServerConfig> {
        let file = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        Ok(self.merge(file))
    }

    pub fn merge(&self, file: TomlConfig) -> ServerConfig {
        ServerConfig {
            base_url: self
                .base_url
                .clone()
                .or(file.upstream.base_url)
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout_seconds: self.timeout_seconds.or(file.upstream.timeout_seconds),
            user_agent: self
                .user_agent
                .clone()
                .or(file.upstream.user_agent)
                .unwrap_or_else(default_user_agent),
            log_level: file.logging.level,
            log_json: self.log_json || file.logging.json.unwrap_or(false),
            verbose: self.verbose,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: None,
            user_agent: default_user_agent(),
            log_level: None,
            log_json: false,
            verbose: false,
        }
    }
}

impl ConfigProvider for ServerConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;

        if let Some(timeout) = self.timeout_seconds {
            validate_range("timeout_seconds", timeout, 1, MAX_TIMEOUT_SECONDS)?;
        }

        validate_non_empty_string("user_agent", &self.user_agent)?;

        if let Some(level) = &self.log_level {
            validate_non_empty_string("logging.level", level)?;
        }

        Ok(())
    }
}
