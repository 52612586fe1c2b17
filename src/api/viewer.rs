//! Viewer side of the library API.
//!
//! Read calls never fail from the caller's point of view: each one logs
//! the error and falls back to a safe value (empty list, zeroed stats,
//! `None`). The `try_*` variants return the underlying error instead.

use std::collections::BTreeMap;

use reqwest::Method;
use serde::Deserialize;
use tracing::{error, info};

use super::{material_path, stats_path, ApiClient, MaterialFilter, LEVELS_PATH, MATERIALS_PATH, SUBJECTS_PATH};
use crate::config::ResolvedConfig;
use crate::domain::{Material, MaterialsPage, SubjectStats};
use crate::error::Result;
use crate::library::Catalog;

/// Viewer library client
#[derive(Debug, Clone)]
pub struct ViewerClient {
    api: ApiClient,
}

#[derive(Debug, Deserialize)]
struct SubjectsBody {
    #[serde(default)]
    subjects: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct LevelsBody {
    #[serde(default)]
    levels: BTreeMap<String, String>,
}

impl ViewerClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Create from config
    pub fn from_config(config: &ResolvedConfig) -> Result<Self> {
        Ok(Self::new(ApiClient::from_config(config)?))
    }

    /// List materials matching a filter
    pub async fn try_fetch_materials(&self, filter: &MaterialFilter) -> Result<MaterialsPage> {
        let query = filter.query_string();
        let path = if query.is_empty() {
            MATERIALS_PATH.to_string()
        } else {
            format!("{}?{}", MATERIALS_PATH, query)
        };

        let request = self.api.request(Method::GET, &path);
        self.api.send("fetch materials", request).await
    }

    /// List materials matching a filter; empty on failure
    pub async fn fetch_materials(&self, filter: &MaterialFilter) -> Vec<Material> {
        match self.try_fetch_materials(filter).await {
            Ok(page) => page.materials,
            Err(e) => {
                error!(error = %e, "Fetch materials error");
                Vec::new()
            }
        }
    }

    pub async fn try_fetch_subject_stats(&self, subject: &str) -> Result<SubjectStats> {
        let request = self.api.request(Method::GET, &stats_path(subject));
        self.api.send("fetch stats", request).await
    }

    /// Per-subject counts; all zero on failure
    pub async fn fetch_subject_stats(&self, subject: &str) -> SubjectStats {
        self.try_fetch_subject_stats(subject)
            .await
            .unwrap_or_else(|e| {
                error!(error = %e, subject, "Fetch stats error");
                SubjectStats::default()
            })
    }

    /// Fetch one material. The server counts this as a view.
    pub async fn try_get_material(&self, id: i64) -> Result<Material> {
        let request = self.api.request(Method::GET, &material_path(id));
        self.api.send("get material", request).await
    }

    /// Fetch one material; `None` on failure (including 404)
    pub async fn get_material(&self, id: i64) -> Option<Material> {
        self.try_get_material(id)
            .await
            .inspect_err(|e| error!(error = %e, id, "Get material error"))
            .ok()
    }

    /// Subject key → display name, as known to the backend
    pub async fn list_subjects(&self) -> BTreeMap<String, String> {
        let request = self.api.request(Method::GET, SUBJECTS_PATH);
        match self.api.send::<SubjectsBody>("list subjects", request).await {
            Ok(body) => body.subjects,
            Err(e) => {
                error!(error = %e, "List subjects error");
                BTreeMap::new()
            }
        }
    }

    /// Level key → display name, as known to the backend
    pub async fn list_levels(&self) -> BTreeMap<String, String> {
        let request = self.api.request(Method::GET, LEVELS_PATH);
        match self.api.send::<LevelsBody>("list levels", request).await {
            Ok(body) => body.levels,
            Err(e) => {
                error!(error = %e, "List levels error");
                BTreeMap::new()
            }
        }
    }

    /// Append every backend material to its subject/level in `catalog`.
    ///
    /// Additive only; materials without a matching slot are dropped. A
    /// failed fetch leaves the catalog untouched.
    pub async fn merge_library_data<'c>(&self, catalog: &'c mut Catalog) -> &'c mut Catalog {
        let materials = self.fetch_materials(&MaterialFilter::default()).await;
        let report = catalog.merge(&materials);

        info!(
            fetched = materials.len(),
            appended = report.appended,
            dropped = report.dropped,
            "Merged backend materials into catalog"
        );

        catalog
    }
}
