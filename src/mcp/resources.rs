// MCP resources: read-only Compiler Explorer listings addressed by URI.

use super::GodboltServer;
use crate::utils::error::{GodboltError, Result};
use rmcp::model::{
    AnnotateAble, Annotated, RawResource, RawResourceTemplate, ReadResourceResult,
    ResourceContents,
};

const SCHEME: &str = "resource://";
const JSON_MIME: &str = "application/json";
const TEXT_MIME: &str = "text/plain";

/// A parsed resource URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceRoute {
    Languages,
    Formats,
    Version,
    Compilers { language_id: String },
    Libraries { language_id: String },
    Instruction { instruction_set: String, opcode: String },
}

impl ResourceRoute {
    pub fn parse(uri: &str) -> Result<Self> {
        let invalid = |reason: &str| GodboltError::InvalidResourceUri {
            uri: uri.to_string(),
            reason: reason.to_string(),
        };

        let path = uri
            .strip_prefix(SCHEME)
            .ok_or_else(|| invalid("expected the resource:// scheme"))?;
        let segments: Vec<&str> = path.split('/').collect();
        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(invalid("empty path segment"));
        }
        if segments.iter().any(|segment| matches!(*segment, "." | "..")) {
            return Err(invalid("dot path segment"));
        }

        match segments.as_slice() {
            ["languages"] => Ok(Self::Languages),
            ["formats"] => Ok(Self::Formats),
            ["version"] => Ok(Self::Version),
            ["compilers", language_id] => Ok(Self::Compilers {
                language_id: language_id.to_string(),
            }),
            ["libraries", language_id] => Ok(Self::Libraries {
                language_id: language_id.to_string(),
            }),
            ["asm", instruction_set, opcode] => Ok(Self::Instruction {
                instruction_set: instruction_set.to_string(),
                opcode: opcode.to_string(),
            }),
            _ => Err(invalid("unknown resource")),
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Version | Self::Instruction { .. } => TEXT_MIME,
            _ => JSON_MIME,
        }
    }
}

fn no_ann<T: AnnotateAble>(raw: T) -> Annotated<T> {
    Annotated::new(raw, None)
}

fn resource(uri: &str, name: &str, title: &str, description: &str, mime: &str) -> Annotated<RawResource> {
    no_ann(RawResource {
        uri: uri.into(),
        name: name.into(),
        title: Some(title.into()),
        description: Some(description.into()),
        mime_type: Some(mime.into()),
        size: None,
        icons: None,
        meta: None,
    })
}

fn template(
    uri_template: &str,
    name: &str,
    title: &str,
    description: &str,
    mime: &str,
) -> Annotated<RawResourceTemplate> {
    no_ann(RawResourceTemplate {
        uri_template: uri_template.into(),
        name: name.into(),
        title: Some(title.into()),
        description: Some(description.into()),
        mime_type: Some(mime.into()),
        icons: None,
    })
}

/// Fixed-URI resources.
pub fn resource_list() -> Vec<Annotated<RawResource>> {
    vec![
        resource(
            "resource://languages",
            "languages",
            "Languages",
            "Languages supported by Compiler Explorer. Use resource://compilers/{language_id} \
             and resource://libraries/{language_id} for per-language listings.",
            JSON_MIME,
        ),
        resource(
            "resource://formats",
            "formats",
            "Formatters",
            "Available code formatters",
            JSON_MIME,
        ),
        resource(
            "resource://version",
            "version",
            "Version",
            "Version of the Compiler Explorer instance",
            TEXT_MIME,
        ),
    ]
}

/// Parameterised resources.
pub fn resource_template_list() -> Vec<Annotated<RawResourceTemplate>> {
    vec![
        template(
            "resource://compilers/{language_id}",
            "compilers",
            "Compilers",
            "Compilers available for a language id (e.g. 'c++', 'rust', 'python')",
            JSON_MIME,
        ),
        template(
            "resource://libraries/{language_id}",
            "libraries",
            "Libraries",
            "Libraries and versions available for a language id",
            JSON_MIME,
        ),
        template(
            "resource://asm/{instruction_set}/{opcode}",
            "instruction-info",
            "Instruction documentation",
            "Documentation for an assembly opcode in an instruction set (e.g. 'x86', 'arm')",
            TEXT_MIME,
        ),
    ]
}

fn pretty(value: &serde_json::Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

impl GodboltServer {
    /// Fetch the upstream payload behind `uri`.
    pub async fn read_uri(&self, uri: &str) -> Result<ReadResourceResult> {
        let route = ResourceRoute::parse(uri)?;
        tracing::debug!("Reading resource {:?}", route);

        let text = match &route {
            ResourceRoute::Languages => pretty(&self.explorer.languages().await?)?,
            ResourceRoute::Formats => pretty(&self.explorer.formats().await?)?,
            ResourceRoute::Version => self.explorer.version().await?,
            ResourceRoute::Compilers { language_id } => {
                pretty(&self.explorer.compilers(language_id).await?)?
            }
            ResourceRoute::Libraries { language_id } => {
                pretty(&self.explorer.libraries(language_id).await?)?
            }
            ResourceRoute::Instruction {
                instruction_set,
                opcode,
            } => {
                self.explorer
                    .instruction_info(instruction_set, opcode)
                    .await?
            }
        };

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::TextResourceContents {
                uri: uri.to_string(),
                mime_type: Some(route.mime_type().into()),
                text,
                meta: None,
            }],
        })
    }
}
