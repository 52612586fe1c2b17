//! Per-subject statistics.

use serde::{Deserialize, Serialize};

/// Material counts for one subject.
///
/// `Default` is the all-zero value the viewer falls back to when the
/// stats endpoint fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default)]
    pub total_materials: u64,
    #[serde(default)]
    pub video_count: u64,
    #[serde(default)]
    pub pdf_count: u64,
    #[serde(default)]
    pub audio_count: u64,
}

impl SubjectStats {
    /// Materials that are neither video, pdf nor audio
    pub fn other_count(&self) -> u64 {
        self.total_materials
            .saturating_sub(self.video_count + self.pdf_count + self.audio_count)
    }
}
