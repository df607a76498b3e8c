//! File repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over canonical `files` storage.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths must call `FileRecord::validate()` before SQL mutations.
//! - `create` ignores any caller-supplied id; the store assigns the key.
//! - List queries order by ascending id, which equals insertion order.

use crate::db::DbError;
use crate::model::file_record::{FileId, FileRecord, FileValidationError};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const FILE_SELECT_SQL: &str = "SELECT
    id,
    folder_path,
    name,
    file_type
FROM files";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for file persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(FileValidationError),
    Db(DbError),
    NotFound(FileId),
    /// Update was called with a record that was never persisted.
    MissingId,
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "file record not found: {id}"),
            Self::MissingId => write!(f, "record has no id; persist it with create first"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::MissingId => None,
        }
    }
}

impl From<FileValidationError> for RepoError {
    fn from(value: FileValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for file record CRUD and path-scoped queries.
pub trait FileRepository {
    /// Inserts a new row and returns the record with its assigned id.
    fn create(&self, record: &FileRecord) -> RepoResult<FileRecord>;
    /// Looks up one record by primary key; `Ok(None)` when absent.
    fn get_by_id(&self, id: FileId) -> RepoResult<Option<FileRecord>>;
    /// Overwrites all mutable fields of an existing row.
    fn update(&self, record: &FileRecord) -> RepoResult<FileRecord>;
    /// Deletes by id and returns the number of rows removed (0 or 1).
    fn delete(&self, id: FileId) -> RepoResult<usize>;
    /// Lists records matching both folder path and file type, id ascending.
    fn get_all_by_type_in_path(
        &self,
        folder_path: &str,
        file_type: &str,
    ) -> RepoResult<Vec<FileRecord>>;
    /// Lists records in a folder path, id ascending.
    fn get_all_files_in_path(&self, folder_path: &str) -> RepoResult<Vec<FileRecord>>;
}

/// SQLite-backed file repository.
///
/// Borrows its connection; construction is plain dependency injection and
/// the repository never owns or pools connections itself.
pub struct SqliteFileRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteFileRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl FileRepository for SqliteFileRepository<'_> {
    fn create(&self, record: &FileRecord) -> RepoResult<FileRecord> {
        record.validate()?;

        // Caller-supplied ids are deliberately not inserted; the store owns
        // key assignment.
        self.conn.execute(
            "INSERT INTO files (folder_path, name, file_type)
             VALUES (?1, ?2, ?3);",
            params![
                record.folder_path.as_str(),
                record.name.as_str(),
                record.file_type.as_str(),
            ],
        )?;

        let mut created = record.clone();
        created.id = Some(self.conn.last_insert_rowid());
        Ok(created)
    }

    fn get_by_id(&self, id: FileId) -> RepoResult<Option<FileRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{FILE_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_file_row(row)?));
        }

        Ok(None)
    }

    fn update(&self, record: &FileRecord) -> RepoResult<FileRecord> {
        record.validate()?;
        let id = record.id.ok_or(RepoError::MissingId)?;

        let changed = self.conn.execute(
            "UPDATE files
             SET
                folder_path = ?1,
                name = ?2,
                file_type = ?3
             WHERE id = ?4;",
            params![
                record.folder_path.as_str(),
                record.name.as_str(),
                record.file_type.as_str(),
                id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(record.clone())
    }

    fn delete(&self, id: FileId) -> RepoResult<usize> {
        // Absence is a zero-count outcome, not an error.
        let removed = self
            .conn
            .execute("DELETE FROM files WHERE id = ?1;", params![id])?;
        Ok(removed)
    }

    fn get_all_by_type_in_path(
        &self,
        folder_path: &str,
        file_type: &str,
    ) -> RepoResult<Vec<FileRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "{FILE_SELECT_SQL}
             WHERE folder_path = ?1 AND file_type = ?2
             ORDER BY id ASC;"
        ))?;

        let rows = stmt.query(params![folder_path, file_type])?;
        collect_file_rows(rows)
    }

    fn get_all_files_in_path(&self, folder_path: &str) -> RepoResult<Vec<FileRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "{FILE_SELECT_SQL}
             WHERE folder_path = ?1
             ORDER BY id ASC;"
        ))?;

        let rows = stmt.query(params![folder_path])?;
        collect_file_rows(rows)
    }
}

fn collect_file_rows(mut rows: rusqlite::Rows<'_>) -> RepoResult<Vec<FileRecord>> {
    let mut records = Vec::new();
    while let Some(row) = rows.next()? {
        records.push(parse_file_row(row)?);
    }
    Ok(records)
}

fn parse_file_row(row: &Row<'_>) -> RepoResult<FileRecord> {
    Ok(FileRecord {
        id: Some(row.get("id")?),
        folder_path: row.get("folder_path")?,
        name: row.get("name")?,
        file_type: row.get("file_type")?,
    })
}
