//! Domain types for the library backend.
//!
//! - Material: a learning resource record and its create/update payloads
//! - SubjectStats: per-subject counts

pub mod material;
pub mod stats;

pub use material::{Material, MaterialType, MaterialUpdate, MaterialsPage, NewMaterial, UploadedFile};
pub use stats::SubjectStats;
