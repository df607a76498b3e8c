//! Core persistence logic for the file record store.
//! This crate is the single source of truth for the CRUD contract over
//! canonical `files` storage.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::file_record::{FileId, FileRecord, FileValidationError};
pub use repo::file_repo::{FileRepository, RepoError, RepoResult, SqliteFileRepository};
pub use service::file_service::FileService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
