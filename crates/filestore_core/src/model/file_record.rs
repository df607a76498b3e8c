//! File record domain model.
//!
//! # Responsibility
//! - Define the canonical file-reference record shared by all callers.
//! - Provide constructors distinguishing new from persisted records.
//!
//! # Invariants
//! - `id` is `None` until the store assigns one; it never changes afterwards.
//! - `file_type` always carries its leading dot (`.jpg`, not `jpg`).

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned surrogate key, compatible with SQLite rowids.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type FileId = i64;

/// One stored file reference.
///
/// Instances handed out by the persistence layer are detached copies;
/// mutating them has no effect until they are passed back through `update`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    /// Surrogate primary key. `None` marks a record pending creation.
    #[serde(default)]
    pub id: Option<FileId>,
    /// Directory the file logically resides in.
    pub folder_path: String,
    /// File base name, without extension.
    pub name: String,
    /// Extension including the leading dot, e.g. `.jpg`.
    pub file_type: String,
}

impl FileRecord {
    /// Creates a new, not-yet-persisted record.
    ///
    /// # Invariants
    /// - `id` starts as `None`; the store assigns it on `create`.
    pub fn new(
        folder_path: impl Into<String>,
        name: impl Into<String>,
        file_type: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            folder_path: folder_path.into(),
            name: name.into(),
            file_type: file_type.into(),
        }
    }

    /// Returns whether the store has assigned an id to this record.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Checks field-level invariants before the record reaches SQL.
    ///
    /// `folder_path` and `name` accept any string, including the empty one;
    /// the store does not interpret them.
    ///
    /// # Errors
    /// - `InvalidFileType` when the extension is missing its leading dot or
    ///   has nothing after it.
    pub fn validate(&self) -> Result<(), FileValidationError> {
        if !self.file_type.starts_with('.') || self.file_type.len() < 2 {
            return Err(FileValidationError::InvalidFileType(
                self.file_type.clone(),
            ));
        }
        Ok(())
    }
}

/// Field-level invariant violations for `FileRecord`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileValidationError {
    InvalidFileType(String),
}

impl Display for FileValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFileType(value) => write!(
                f,
                "file_type `{value}` must start with a dot and name an extension"
            ),
        }
    }
}

impl Error for FileValidationError {}
