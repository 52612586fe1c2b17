//! Subject → level → materials catalog.
//!
//! The catalog starts from the built-in table (see [`super::data`]) and
//! is extended in memory by merging backend materials into it. Merging is
//! additive: existing entries are never removed or deduplicated.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Material, MaterialType};

/// The full subject catalog, in display order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub subjects: Vec<Subject>,
}

/// Subject grouping used by the mini-app's filter tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Exact,
    Languages,
    Humanities,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    /// Key used by the backend (e.g. "worldHistory")
    pub key: String,
    pub title: String,
    pub icon: String,
    /// CSS gradient for the subject card
    pub gradient: String,
    pub category: Category,
    pub levels: Vec<Level>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    /// Key used by the backend (e.g. "beginner")
    pub key: String,
    pub name: String,
    pub materials: Vec<CatalogMaterial>,
}

/// A material as shown in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogMaterial {
    #[serde(rename = "type")]
    pub kind: MaterialType,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Backend id; `None` for built-in entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,
}

impl From<&Material> for CatalogMaterial {
    fn from(material: &Material) -> Self {
        Self {
            kind: material.material_type,
            title: material.title.clone(),
            duration: material.duration.clone(),
            pages: material.pages,
            url: material.file_url.clone(),
            description: material.description.clone(),
            id: Some(material.id),
            views: Some(material.views_count),
        }
    }
}

/// Outcome of a merge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Materials appended to a level
    pub appended: usize,
    /// Materials whose subject/level is not in the catalog
    pub dropped: usize,
}

impl Catalog {
    /// Get a subject by key
    pub fn subject(&self, key: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.key == key)
    }

    /// Get a level by subject and level key
    pub fn level(&self, subject: &str, level: &str) -> Option<&Level> {
        self.subject(subject)?.levels.iter().find(|l| l.key == level)
    }

    fn level_mut(&mut self, subject: &str, level: &str) -> Option<&mut Level> {
        self.subjects
            .iter_mut()
            .find(|s| s.key == subject)?
            .levels
            .iter_mut()
            .find(|l| l.key == level)
    }

    /// Subjects in a category, in catalog order
    pub fn by_category(&self, category: Category) -> Vec<&Subject> {
        self.subjects
            .iter()
            .filter(|s| s.category == category)
            .collect()
    }

    /// Append backend materials to their subject/level.
    ///
    /// Backend order is kept within each level. Materials with no matching
    /// subject/level are dropped.
    pub fn merge(&mut self, materials: &[Material]) -> MergeReport {
        let mut report = MergeReport::default();

        for material in materials {
            match self.level_mut(&material.subject, &material.level) {
                Some(level) => {
                    level.materials.push(CatalogMaterial::from(material));
                    report.appended += 1;
                }
                None => {
                    debug!(
                        id = material.id,
                        subject = %material.subject,
                        level = %material.level,
                        "No catalog slot for material, dropping"
                    );
                    report.dropped += 1;
                }
            }
        }

        report
    }

    /// Total number of materials across all subjects
    pub fn material_count(&self) -> usize {
        self.subjects.iter().map(Subject::material_count).sum()
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}

impl Subject {
    pub fn material_count(&self) -> usize {
        self.levels.iter().map(|l| l.materials.len()).sum()
    }

    /// Count materials of one type across all levels
    pub fn count_of(&self, kind: MaterialType) -> usize {
        self.levels
            .iter()
            .flat_map(|l| &l.materials)
            .filter(|m| m.kind == kind)
            .count()
    }
}
