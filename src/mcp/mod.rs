// MCP server: tools forward to the Compiler Explorer port.

#[cfg(test)]
mod fake;
mod handler;
pub mod resources;

use crate::domain::model::{CompileRequest, FormatRequest, LibrarySelection, SourceFile};
use crate::domain::ports::CompilerExplorer;
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    schemars, tool, tool_router,
};
use serde::Deserialize;
use std::sync::Arc;

pub const SERVER_NAME: &str = "godbolt-compiler-explorer";

/// MCP server state
#[derive(Clone)]
pub struct GodboltServer {
    explorer: Arc<dyn CompilerExplorer>,
    tool_router: ToolRouter<Self>,
}

impl GodboltServer {
    pub fn new(explorer: Arc<dyn CompilerExplorer>) -> Self {
        Self {
            explorer,
            tool_router: Self::tool_router(),
        }
    }

    /// Names of the registered tools, in registration order.
    pub fn tool_names(&self) -> Vec<String> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect()
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CompileCodeRequest {
    #[schemars(description = "Compiler id, as listed by resource://compilers/{language_id}")]
    pub compiler_id: String,
    #[schemars(description = "Source code to compile")]
    pub source: String,
    #[schemars(description = "Compiler flags, e.g. \"-O2 -std=c++20\"")]
    pub user_arguments: Option<String>,
    #[schemars(description = "Additional source files with 'filename' and 'contents'")]
    pub files: Option<Vec<SourceFile>>,
    #[schemars(description = "Libraries with 'id' and 'version', as listed by resource://libraries/{language_id}")]
    pub libraries: Option<Vec<LibrarySelection>>,
}

impl CompileCodeRequest {
    fn into_parts(self) -> (String, CompileRequest) {
        let request =
            CompileRequest::new(self.source, self.user_arguments, self.files, self.libraries);
        (self.compiler_id, request)
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct FormatCodeRequest {
    #[schemars(description = "Formatter id, as listed by resource://formats")]
    pub formatter: String,
    #[schemars(description = "Source code to format")]
    pub source: String,
}

/// The formatted text lives under `answer`; anything else is handed back raw.
fn format_answer(reply: serde_json::Value) -> String {
    match reply.get("answer").and_then(|answer| answer.as_str()) {
        Some(answer) => answer.to_string(),
        None => reply.to_string(),
    }
}

#[tool_router]
impl GodboltServer {
    #[tool(description = "Compile source code with the given compiler and return the raw Compiler Explorer output. \
        Get valid compiler ids from resource://compilers/{language_id} and library ids from resource://libraries/{language_id}. \
        If unsure which compiler or library version to use, pick the latest stable one and tell the user which version was used.")]
    async fn compile_code(
        &self,
        Parameters(req): Parameters<CompileCodeRequest>,
    ) -> Result<String, String> {
        let (compiler_id, request) = req.into_parts();
        self.explorer
            .compile(&compiler_id, &request)
            .await
            .map_err(|e| e.user_friendly_message())
    }

    #[tool(description = "Build a CMake project with the given compiler and return the raw Compiler Explorer output. \
        Pass CMakeLists.txt and other sources through 'files'. \
        Get valid compiler ids from resource://compilers/{language_id} and library ids from resource://libraries/{language_id}. \
        If unsure which compiler or library version to use, pick the latest stable one and tell the user which version was used.")]
    async fn compile_cmake(
        &self,
        Parameters(req): Parameters<CompileCodeRequest>,
    ) -> Result<String, String> {
        let (compiler_id, request) = req.into_parts();
        self.explorer
            .compile_cmake(&compiler_id, &request)
            .await
            .map_err(|e| e.user_friendly_message())
    }

    #[tool(description = "Format source code with the given formatter. Formatter ids come from resource://formats. \
        Returns the formatted source; if the formatter reply carries no 'answer' text, the raw JSON reply is returned instead.")]
    async fn format_code(
        &self,
        Parameters(req): Parameters<FormatCodeRequest>,
    ) -> Result<String, String> {
        let request = FormatRequest { source: req.source };
        self.explorer
            .format(&req.formatter, &request)
            .await
            .map(format_answer)
            .map_err(|e| e.user_friendly_message())
    }
}
