use crate::domain::model::{CompileRequest, FormatRequest};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn timeout(&self) -> Option<Duration>;
    fn user_agent(&self) -> &str;
}

/// The Compiler Explorer REST surface. JSON endpoints hand back the decoded
/// value, text endpoints the raw body.
#[async_trait]
pub trait CompilerExplorer: Send + Sync {
    async fn languages(&self) -> Result<serde_json::Value>;
    async fn compilers(&self, language_id: &str) -> Result<serde_json::Value>;
    async fn libraries(&self, language_id: &str) -> Result<serde_json::Value>;
    async fn formats(&self) -> Result<serde_json::Value>;
    async fn instruction_info(&self, instruction_set: &str, opcode: &str) -> Result<String>;
    async fn version(&self) -> Result<String>;
    async fn compile(&self, compiler_id: &str, request: &CompileRequest) -> Result<String>;
    async fn compile_cmake(&self, compiler_id: &str, request: &CompileRequest) -> Result<String>;
    async fn format(&self, formatter: &str, request: &FormatRequest) -> Result<serde_json::Value>;
}
