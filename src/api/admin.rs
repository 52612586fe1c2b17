//! Admin side of the library API.
//!
//! Every write is attributed to the configured platform user id. Writes
//! log and return the error; the list call degrades to an empty list.

use std::path::Path;

use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use super::{material_path, ApiClient, MATERIALS_PATH, UPLOAD_PATH};
use crate::config::ResolvedConfig;
use crate::domain::{Material, MaterialType, MaterialUpdate, MaterialsPage, NewMaterial, UploadedFile};
use crate::error::{ApiError, Result};

/// Admin library client
#[derive(Debug, Clone)]
pub struct AdminClient {
    api: ApiClient,
    user_id: i64,
}

/// Server acknowledgement of a delete
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DeleteAck {
    #[serde(default)]
    pub message: String,
}

/// JSON body with the caller's user id alongside the payload fields
#[derive(Serialize)]
struct Attributed<'a, T: Serialize> {
    #[serde(flatten)]
    payload: &'a T,
    user_id: i64,
}

#[derive(Serialize)]
struct UserOnly {
    user_id: i64,
}

impl AdminClient {
    pub fn new(api: ApiClient, user_id: i64) -> Self {
        Self { api, user_id }
    }

    /// Create from config
    pub fn from_config(config: &ResolvedConfig) -> Result<Self> {
        Ok(Self::new(ApiClient::from_config(config)?, config.user_id))
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    /// The backend reads `user_id` from the query on write routes
    fn attributed_path(&self, path: &str) -> String {
        format!("{}?user_id={}", path, self.user_id)
    }

    /// Upload a local file
    pub async fn upload_file(&self, path: &Path) -> Result<UploadedFile> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| ApiError::File {
                path: path.to_path_buf(),
                source,
            })
            .inspect_err(|e| error!(error = %e, "Upload error"))?;

        let file_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        self.upload_bytes(&file_name, bytes).await
    }

    /// Upload in-memory file content under a file name
    pub async fn upload_bytes(&self, file_name: &str, bytes: Vec<u8>) -> Result<UploadedFile> {
        let mime = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(MaterialType::from_extension)
            .map(|(_, mime)| mime)
            .unwrap_or("application/octet-stream");

        let size = bytes.len();
        let file_part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime)
            .map_err(|source| ApiError::Request {
                operation: "upload",
                source,
            })?;

        let form = Form::new()
            .part("file", file_part)
            .text("user_id", self.user_id.to_string());

        let request = self
            .api
            .request(Method::POST, &self.attributed_path(UPLOAD_PATH))
            .multipart(form);

        let uploaded: UploadedFile = self
            .api
            .send("upload", request)
            .await
            .inspect_err(|e| error!(error = %e, file = file_name, "Upload error"))?;

        info!(file = %uploaded.filename, size, user_id = self.user_id, "File uploaded");
        Ok(uploaded)
    }

    /// Create a material record
    pub async fn add_material(&self, material: &NewMaterial) -> Result<Material> {
        let body = Attributed {
            payload: material,
            user_id: self.user_id,
        };
        let request = self
            .api
            .request(Method::POST, &self.attributed_path(MATERIALS_PATH))
            .json(&body);

        let created: Material = self
            .api
            .send("add material", request)
            .await
            .inspect_err(|e| error!(error = %e, "Add material error"))?;

        info!(id = created.id, user_id = self.user_id, "Material created");
        Ok(created)
    }

    /// List all active materials; empty on failure
    pub async fn get_materials(&self) -> Vec<Material> {
        let request = self.api.request(Method::GET, MATERIALS_PATH);

        match self.api.send::<MaterialsPage>("get materials", request).await {
            Ok(page) => page.materials,
            Err(e) => {
                error!(error = %e, "Get materials error");
                Vec::new()
            }
        }
    }

    /// Change fields of an existing material
    pub async fn update_material(&self, id: i64, update: &MaterialUpdate) -> Result<Material> {
        let request = self
            .api
            .request(Method::PUT, &self.attributed_path(&material_path(id)))
            .json(update);

        let updated: Material = self
            .api
            .send("update material", request)
            .await
            .inspect_err(|e| error!(error = %e, id, "Update material error"))?;

        info!(id, user_id = self.user_id, "Material updated");
        Ok(updated)
    }

    /// Soft-delete a material
    pub async fn delete_material(&self, id: i64) -> Result<DeleteAck> {
        let request = self
            .api
            .request(Method::DELETE, &self.attributed_path(&material_path(id)))
            .json(&UserOnly {
                user_id: self.user_id,
            });

        let ack: DeleteAck = self
            .api
            .send("delete material", request)
            .await
            .inspect_err(|e| error!(error = %e, id, "Delete material error"))?;

        info!(id, user_id = self.user_id, "Material deleted");
        Ok(ack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributed_body_flattens_payload() {
        let material = NewMaterial::new("english", "advanced", MaterialType::Video, "Academic English 2")
            .with_duration("70 min");
        let body = Attributed {
            payload: &material,
            user_id: 99,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["user_id"], 99);
        assert_eq!(json["subject"], "english");
        assert_eq!(json["duration"], "70 min");
        assert!(json.get("payload").is_none());
    }

    #[test]
    fn test_attributed_path() {
        let admin = AdminClient::new(ApiClient::new("http://localhost:8000").unwrap(), 12);
        assert_eq!(
            admin.attributed_path(&material_path(3)),
            "/api/library/materials/3?user_id=12"
        );
    }
}
