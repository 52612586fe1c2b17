//! The subject catalog shown by the mini-app.
//!
//! ```text
//! Catalog
//! └── Subject (mathematics, physics, ..., key + title + icon + category)
//!     └── Level (beginner / intermediate / advanced, or era keys for history)
//!         └── CatalogMaterial (built-in entries, then merged backend entries)
//! ```

pub mod catalog;
pub mod data;

pub use catalog::{Catalog, CatalogMaterial, Category, Level, MergeReport, Subject};
