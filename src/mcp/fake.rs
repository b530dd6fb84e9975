use crate::domain::model::{CompileRequest, FormatRequest};
use crate::domain::ports::CompilerExplorer;
use crate::utils::error::{GodboltError, Result};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Mutex;

/// Records the last call and answers from canned values.
#[derive(Default)]
pub struct FakeExplorer {
    pub calls: Mutex<Vec<String>>,
    pub last_compile: Mutex<Option<CompileRequest>>,
    pub fail_with: Option<u16>,
}

impl FakeExplorer {
    fn record(&self, call: String) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        match self.fail_with {
            Some(status) => Err(GodboltError::UpstreamStatus {
                status,
                url: "http://fake/api".to_string(),
                body: "fake failure".to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CompilerExplorer for FakeExplorer {
    async fn languages(&self) -> Result<serde_json::Value> {
        self.record("languages".to_string())?;
        Ok(json!([{"id": "c++", "name": "C++"}]))
    }

    async fn compilers(&self, language_id: &str) -> Result<serde_json::Value> {
        self.record(format!("compilers:{}", language_id))?;
        Ok(json!([{"id": "g132", "lang": language_id}]))
    }

    async fn libraries(&self, language_id: &str) -> Result<serde_json::Value> {
        self.record(format!("libraries:{}", language_id))?;
        Ok(json!([]))
    }

    async fn formats(&self) -> Result<serde_json::Value> {
        self.record("formats".to_string())?;
        Ok(json!([{"type": "clangformat"}]))
    }

    async fn instruction_info(&self, instruction_set: &str, opcode: &str) -> Result<String> {
        self.record(format!("asm:{}:{}", instruction_set, opcode))?;
        Ok(format!("{} moves data", opcode))
    }

    async fn version(&self) -> Result<String> {
        self.record("version".to_string())?;
        Ok("Compiler Explorer v1".to_string())
    }

    async fn compile(&self, compiler_id: &str, request: &CompileRequest) -> Result<String> {
        self.record(format!("compile:{}", compiler_id))?;
        *self.last_compile.lock().unwrap() = Some(request.clone());
        Ok("square(int):\n        ret".to_string())
    }

    async fn compile_cmake(&self, compiler_id: &str, request: &CompileRequest) -> Result<String> {
        self.record(format!("cmake:{}", compiler_id))?;
        *self.last_compile.lock().unwrap() = Some(request.clone());
        Ok("cmake ok".to_string())
    }

    async fn format(&self, formatter: &str, request: &FormatRequest) -> Result<serde_json::Value> {
        self.record(format!("format:{}", formatter))?;
        Ok(json!({"answer": request.source.trim(), "exit": 0}))
    }
}
