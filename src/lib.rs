pub mod adapters;
pub mod config;
pub mod domain;
pub mod mcp;
pub mod utils;

pub use adapters::http::HttpCompilerExplorer;
pub use config::{CliConfig, ServerConfig};
pub use domain::ports::{CompilerExplorer, ConfigProvider};
pub use mcp::GodboltServer;
pub use utils::error::{GodboltError, Result};
