use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An extra file sent next to the main source (headers, CMakeLists.txt, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SourceFile {
    #[schemars(description = "File name, relative to the main source")]
    pub filename: String,
    #[schemars(description = "File contents")]
    pub contents: String,
}

/// A library id/version pair as listed by `/api/libraries/{language}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LibrarySelection {
    #[schemars(description = "Library id")]
    pub id: String,
    #[schemars(description = "Library version id")]
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompileOptions {
    pub user_arguments: String,
    pub libraries: Vec<LibrarySelection>,
}

/// Body of `POST /api/compiler/{id}/compile` and `/cmake`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileRequest {
    pub source: String,
    pub options: CompileOptions,
    pub files: Vec<SourceFile>,
}

impl CompileRequest {
    /// Missing optionals become empty values so the envelope always carries
    /// every key.
    pub fn new(
        source: String,
        user_arguments: Option<String>,
        files: Option<Vec<SourceFile>>,
        libraries: Option<Vec<LibrarySelection>>,
    ) -> Self {
        Self {
            source,
            options: CompileOptions {
                user_arguments: user_arguments.unwrap_or_default(),
                libraries: libraries.unwrap_or_default(),
            },
            files: files.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatRequest {
    pub source: String,
}
