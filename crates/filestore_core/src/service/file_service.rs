//! File record use-case service.
//!
//! # Responsibility
//! - Provide stable CRUD entry points for core callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::file_record::{FileId, FileRecord};
use crate::repo::file_repo::{FileRepository, RepoError, RepoResult};

/// Use-case service wrapper for file record operations.
pub struct FileService<R: FileRepository> {
    repo: R,
}

impl<R: FileRepository> FileService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persists a new record through repository validation.
    pub fn create(&self, record: &FileRecord) -> RepoResult<FileRecord> {
        self.repo.create(record)
    }

    /// Builds and persists a record from its three field values.
    ///
    /// # Contract
    /// - Returns the created record with its store-assigned id.
    pub fn create_file(
        &self,
        folder_path: impl Into<String>,
        name: impl Into<String>,
        file_type: impl Into<String>,
    ) -> RepoResult<FileRecord> {
        let record = FileRecord::new(folder_path, name, file_type);
        self.repo.create(&record)
    }

    /// Fetches one record by id; `Ok(None)` when absent.
    pub fn get_by_id(&self, id: FileId) -> RepoResult<Option<FileRecord>> {
        self.repo.get_by_id(id)
    }

    /// Overwrites an existing record's mutable fields.
    pub fn update(&self, record: &FileRecord) -> RepoResult<FileRecord> {
        self.repo.update(record)
    }

    /// Renames an existing record, keeping path and type untouched.
    ///
    /// # Contract
    /// - Signals `NotFound` when `id` does not reference a stored row.
    pub fn rename_file(&self, id: FileId, new_name: impl Into<String>) -> RepoResult<FileRecord> {
        let mut record = self.repo.get_by_id(id)?.ok_or(RepoError::NotFound(id))?;
        record.name = new_name.into();
        self.repo.update(&record)
    }

    /// Deletes by id, returning the removed-row count (0 or 1).
    pub fn delete(&self, id: FileId) -> RepoResult<usize> {
        self.repo.delete(id)
    }

    /// Lists records of one type within a folder path, id ascending.
    pub fn get_all_by_type_in_path(
        &self,
        folder_path: &str,
        file_type: &str,
    ) -> RepoResult<Vec<FileRecord>> {
        self.repo.get_all_by_type_in_path(folder_path, file_type)
    }

    /// Lists all records within a folder path, id ascending.
    pub fn get_all_files_in_path(&self, folder_path: &str) -> RepoResult<Vec<FileRecord>> {
        self.repo.get_all_files_in_path(folder_path)
    }
}
