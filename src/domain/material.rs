//! Material records as the backend serves them.
//!
//! A material is a single learning resource (video, PDF or audio)
//! classified by subject and level.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A material record returned by the library backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Backend identifier
    pub id: i64,

    /// Subject key (e.g. "mathematics")
    pub subject: String,

    /// Level key (e.g. "beginner")
    pub level: String,

    /// Kind of resource
    pub material_type: MaterialType,

    /// Display title
    pub title: String,

    /// Free-form duration ("45 min")
    #[serde(default)]
    pub duration: Option<String>,

    /// Page count, for documents
    #[serde(default)]
    pub pages: Option<u32>,

    /// Where the file is served from
    #[serde(default)]
    pub file_url: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Size in bytes
    #[serde(default)]
    pub file_size: Option<u64>,

    /// Incremented by the server on every single-material fetch
    #[serde(default)]
    pub views_count: u64,

    /// Soft-delete flag
    #[serde(default = "default_active")]
    pub is_active: bool,

    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

/// Accept RFC 3339 or naive ISO strings; any other value becomes `None`
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(serde_json::Value::as_str).and_then(parse_timestamp))
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    raw.parse::<NaiveDateTime>().ok().map(|ts| ts.and_utc())
}

/// Type of material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialType {
    Video,
    Pdf,
    Audio,

    /// Anything the backend sends that we don't know about
    #[serde(other)]
    Other,
}

impl MaterialType {
    /// Wire name used in query strings and payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialType::Video => "video",
            MaterialType::Pdf => "pdf",
            MaterialType::Audio => "audio",
            MaterialType::Other => "other",
        }
    }

    /// Guess the material type and MIME type from a file extension
    pub fn from_extension(ext: &str) -> Option<(Self, &'static str)> {
        match ext.to_lowercase().as_str() {
            "mp4" => Some((MaterialType::Video, "video/mp4")),
            "mpeg" | "mpg" => Some((MaterialType::Video, "video/mpeg")),
            "mov" => Some((MaterialType::Video, "video/quicktime")),
            "mp3" => Some((MaterialType::Audio, "audio/mpeg")),
            "wav" => Some((MaterialType::Audio, "audio/wav")),
            "pdf" => Some((MaterialType::Pdf, "application/pdf")),
            _ => None,
        }
    }
}

impl std::fmt::Display for MaterialType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MaterialType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "video" => Ok(MaterialType::Video),
            "pdf" => Ok(MaterialType::Pdf),
            "audio" => Ok(MaterialType::Audio),
            _ => anyhow::bail!("Unknown material type: {} (expected video, pdf or audio)", s),
        }
    }
}

/// Payload for creating a material
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMaterial {
    pub subject: String,
    pub level: String,
    pub material_type: MaterialType,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
}

impl NewMaterial {
    /// Create a payload with the required fields
    pub fn new(
        subject: impl Into<String>,
        level: impl Into<String>,
        material_type: MaterialType,
        title: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            level: level.into(),
            material_type,
            title: title.into(),
            duration: None,
            file_url: None,
            description: None,
            file_size: None,
        }
    }

    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = Some(duration.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Point the material at an uploaded file
    pub fn with_upload(mut self, upload: &UploadedFile) -> Self {
        self.file_url = Some(upload.file_url.clone());
        self.file_size = Some(upload.file_size);
        self
    }
}

/// Partial update; only set fields are sent
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaterialUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl MaterialUpdate {
    /// True when nothing would be changed
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.duration.is_none()
            && self.file_url.is_none()
            && self.description.is_none()
            && self.is_active.is_none()
    }
}

/// Response of the upload endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedFile {
    /// Stored file name (timestamp-prefixed by the server)
    pub filename: String,
    pub file_url: String,
    pub file_size: u64,
    /// "video", "audio" or "pdf"
    pub file_type: MaterialType,
}

/// Body of the list endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MaterialsPage {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub materials: Vec<Material>,
}
