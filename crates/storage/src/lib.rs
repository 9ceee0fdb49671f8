#![forbid(unsafe_code)]

pub mod json;
pub mod repository;

pub use json::{load_catalog_file, load_catalog_str};
pub use repository::{CatalogRepository, InMemoryCatalog, StorageError};
