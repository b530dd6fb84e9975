use crate::domain::model::{CompileRequest, FormatRequest};
use crate::domain::ports::{CompilerExplorer, ConfigProvider};
use crate::utils::error::{GodboltError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use url::Url;

/// reqwest-backed client for a Compiler Explorer instance.
#[derive(Debug, Clone)]
pub struct HttpCompilerExplorer {
    client: Client,
    base_url: Url,
}

impl HttpCompilerExplorer {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let base_url = Url::parse(config.base_url()).map_err(|e| {
            GodboltError::InvalidConfigValueError {
                field: "base_url".to_string(),
                value: config.base_url().to_string(),
                reason: format!("Invalid URL format: {}", e),
            }
        })?;

        if base_url.cannot_be_a_base() {
            return Err(GodboltError::InvalidConfigValueError {
                field: "base_url".to_string(),
                value: config.base_url().to_string(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        let mut builder = Client::builder().user_agent(config.user_agent().to_string());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/api/{segments...}`, each segment percent-encoded on its own.
    ///
    /// `url` drops `.` and `..` segments (and decodes `%2E` to the same), so
    /// those and empty ids are refused instead of silently hitting the parent
    /// endpoint.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        for segment in segments {
            check_segment(segment)?;
        }

        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push("api").extend(segments);
        }
        Ok(url)
    }

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    fn get(&self, segments: &[&str], accept_json: bool) -> Result<(Url, RequestBuilder)> {
        let url = self.endpoint(segments)?;
        let mut request = self.client.get(url.clone());
        if accept_json {
            request = request.headers(Self::json_headers());
        }
        Ok((url, request))
    }

    fn post<B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
        accept_json: bool,
    ) -> Result<(Url, RequestBuilder)> {
        let url = self.endpoint(segments)?;
        let mut request = self.client.post(url.clone()).json(body);
        if accept_json {
            request = request.headers(Self::json_headers());
        }
        Ok((url, request))
    }

    /// Send and fail on any non-success status, keeping the body for the
    /// error message.
    async fn send(url: Url, request: RequestBuilder) -> Result<reqwest::Response> {
        tracing::debug!("📡 Upstream request: {}", url);
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("📡 Upstream status {} for {}", status, url);

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!("❌ Upstream request failed with status {}: {}", status, url);
        Err(GodboltError::UpstreamStatus {
            status: status.as_u16(),
            url: url.to_string(),
            body,
        })
    }

    async fn fetch_json(&self, prepared: Result<(Url, RequestBuilder)>) -> Result<serde_json::Value> {
        let (url, request) = prepared?;
        let response = Self::send(url, request).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn fetch_text(&self, prepared: Result<(Url, RequestBuilder)>) -> Result<String> {
        let (url, request) = prepared?;
        let response = Self::send(url, request).await?;
        Ok(response.text().await?)
    }
}

fn check_segment(segment: &str) -> Result<()> {
    let reason = match segment {
        "" => "identifier cannot be empty",
        "." | ".." => "dot segments cannot be sent as a path segment",
        _ => return Ok(()),
    };
    Err(GodboltError::InvalidIdentifier {
        value: segment.to_string(),
        reason: reason.to_string(),
    })
}

#[async_trait]
impl CompilerExplorer for HttpCompilerExplorer {
    async fn languages(&self) -> Result<serde_json::Value> {
        self.fetch_json(self.get(&["languages"], true)).await
    }

    async fn compilers(&self, language_id: &str) -> Result<serde_json::Value> {
        self.fetch_json(self.get(&["compilers", language_id], true))
            .await
    }

    async fn libraries(&self, language_id: &str) -> Result<serde_json::Value> {
        self.fetch_json(self.get(&["libraries", language_id], true))
            .await
    }

    async fn formats(&self) -> Result<serde_json::Value> {
        self.fetch_json(self.get(&["formats"], true)).await
    }

    async fn instruction_info(&self, instruction_set: &str, opcode: &str) -> Result<String> {
        self.fetch_text(self.get(&["asm", instruction_set, opcode], false))
            .await
    }

    async fn version(&self) -> Result<String> {
        self.fetch_text(self.get(&["version"], true)).await
    }

    async fn compile(&self, compiler_id: &str, request: &CompileRequest) -> Result<String> {
        self.fetch_text(self.post(&["compiler", compiler_id, "compile"], request, false))
            .await
    }

    async fn compile_cmake(&self, compiler_id: &str, request: &CompileRequest) -> Result<String> {
        self.fetch_text(self.post(&["compiler", compiler_id, "cmake"], request, false))
            .await
    }

    async fn format(&self, formatter: &str, request: &FormatRequest) -> Result<serde_json::Value> {
        self.fetch_json(self.post(&["format", formatter], request, true))
            .await
    }
}
