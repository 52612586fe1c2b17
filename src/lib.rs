//! edu-library - client for the mini-app learning materials library
//!
//! Talks to the `/api/library` backend and overlays its materials on the
//! built-in subject catalog.
//!
//! # Modules
//!
//! - `api`: HTTP clients (shared transport, admin client, viewer client)
//! - `config`: API origin and user id resolution
//! - `domain`: Data structures (Material, SubjectStats)
//! - `library`: The subject → level → materials catalog and merge
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog with backend materials merged in
//! edu-library --server https://abc.ngrok-free.app catalog
//!
//! # Upload a file and register it
//! edu-library --user-id 42 upload lesson.mp4
//! edu-library --user-id 42 add --subject physics --level beginner \
//!     --type video --title "Mexanika 2" --file-url /uploads/library/...
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod library;

// Re-export main types at crate root for convenience
pub use api::{AdminClient, ApiClient, MaterialFilter, ViewerClient};
pub use domain::{Material, MaterialType, MaterialUpdate, NewMaterial, SubjectStats, UploadedFile};
pub use error::{ApiError, Result};
pub use library::{Catalog, CatalogMaterial, Category, MergeReport};
