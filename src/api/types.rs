//! Wire types for the SeaTunnel REST API.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::io::AsyncRead;

/// Current connection settings, safe to hand to a caller.
///
/// Never carries the API key itself, only whether one is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionSettings {
    /// Base URL of the SeaTunnel REST API
    pub url: String,
    /// Whether an API key is set
    pub has_api_key: bool,
}

/// How to change the stored API key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ApiKeyUpdate {
    /// Leave the current key as it is
    #[default]
    Keep,
    /// Replace the key
    Set(String),
    /// Remove the key; requests go out without `Authorization`
    Clear,
}

impl From<Option<String>> for ApiKeyUpdate {
    fn from(key: Option<String>) -> Self {
        key.map_or(Self::Keep, Self::Set)
    }
}

/// A job identifier, accepted as either a string or an integer.
///
/// Path segments and query values always use the string form; request
/// bodies keep whichever representation the caller supplied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JobId {
    /// Numeric ID
    Int(i64),
    /// String ID
    Str(String),
}

impl JobId {
    /// Render for use in a URL path segment or query value.
    pub fn as_path_segment(&self) -> String {
        self.to_string()
    }

    /// Render for use in a JSON body, preserving the original type.
    pub fn to_body_value(&self) -> Value {
        match self {
            Self::Int(id) => Value::from(*id),
            Self::Str(id) => Value::from(id.as_str()),
        }
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{}", id),
            Self::Str(id) => f.write_str(id),
        }
    }
}

impl From<i64> for JobId {
    fn from(id: i64) -> Self {
        Self::Int(id)
    }
}

impl From<String> for JobId {
    fn from(id: String) -> Self {
        Self::Str(id)
    }
}

impl From<&str> for JobId {
    fn from(id: &str) -> Self {
        Self::Str(id.to_string())
    }
}

/// Job configuration format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobFormat {
    /// HOCON (the SeaTunnel default)
    #[default]
    Hocon,
    /// JSON
    Json,
    /// YAML
    Yaml,
}

impl JobFormat {
    /// Query-string value understood by the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hocon => "hocon",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }

    /// Infer the format from a file name.
    ///
    /// Only `.json`, `.yaml` and `.yml` are recognised. Anything else returns
    /// `None` so the API falls back to its own default.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

impl fmt::Display for JobFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional query parameters shared by `/submit-job` and `/submit-job/upload`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitJobOptions {
    /// Job name (`jobName`)
    pub job_name: Option<String>,
    /// Job ID (`jobId`)
    pub job_id: Option<JobId>,
    /// Start from a savepoint (`isStartWithSavePoint`)
    pub start_with_save_point: Option<bool>,
    /// Configuration format (`format`)
    pub format: Option<JobFormat>,
}

impl SubmitJobOptions {
    /// Query pairs, in a fixed order, for every option that was supplied.
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(ref name) = self.job_name {
            pairs.push(("jobName", name.clone()));
        }
        if let Some(ref id) = self.job_id {
            pairs.push(("jobId", id.as_path_segment()));
        }
        if let Some(flag) = self.start_with_save_point {
            pairs.push(("isStartWithSavePoint", flag.to_string()));
        }
        if let Some(format) = self.format {
            pairs.push(("format", format.as_str().to_string()));
        }
        pairs
    }
}

/// Source of the configuration file for `/submit-job/upload`.
pub enum UploadSource<'a> {
    /// A path the client opens, reads and closes itself.
    Path(PathBuf),
    /// An async reader owned by the caller. The client reads it to the end
    /// but never closes it.
    Reader {
        /// File name sent in the multipart part
        file_name: String,
        /// The caller's handle
        reader: &'a mut (dyn AsyncRead + Unpin + Send),
    },
}

impl UploadSource<'_> {
    /// File name reported to the server.
    pub fn file_name(&self) -> String {
        match self {
            Self::Path(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "config".to_string()),
            Self::Reader { file_name, .. } => file_name.clone(),
        }
    }

    /// Format implied by the file name, if any.
    pub fn inferred_format(&self) -> Option<JobFormat> {
        match self {
            Self::Path(path) => JobFormat::from_path(path),
            Self::Reader { file_name, .. } => JobFormat::from_path(Path::new(file_name)),
        }
    }
}

impl fmt::Debug for UploadSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Self::Reader { file_name, .. } => {
                f.debug_struct("Reader").field("file_name", file_name).finish_non_exhaustive()
            }
        }
    }
}
