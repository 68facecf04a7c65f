use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tracing::debug;
use crate::errors::EchoError;
use super::schema::BUNDLED_SCHEMA;

/// Append-only store of echo reports backed by a SQLite file.
///
/// No connection is held between calls: every operation opens its own,
/// runs a single statement and drops it again.
#[derive(Debug, Clone)]
pub struct ReportStore {
    path: PathBuf,
}

impl ReportStore {
    /// Opens the store at `path` and applies the schema definition file.
    pub fn open(path: impl AsRef<Path>, schema_path: impl AsRef<Path>) -> Result<Self, EchoError> {
        let schema_path = schema_path.as_ref();
        let schema = std::fs::read_to_string(schema_path).map_err(|e| {
            EchoError::Storage(format!("Failed to read schema {}: {}", schema_path.display(), e))
        })?;
        Self::open_with_schema(path, &schema)
    }

    /// Opens the store with the schema shipped in the binary.
    pub fn open_bundled(path: impl AsRef<Path>) -> Result<Self, EchoError> {
        Self::open_with_schema(path, BUNDLED_SCHEMA)
    }

    pub fn open_with_schema(path: impl AsRef<Path>, schema_sql: &str) -> Result<Self, EchoError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                EchoError::Storage(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        let store = Self { path: path.to_path_buf() };
        let conn = store.connect()?;
        conn.execute_batch(schema_sql)
            .map_err(|e| EchoError::Storage(format!("Failed to apply schema: {}", e)))?;

        let has_reports: bool = conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'reports')",
                [],
                |row| row.get(0),
            )
            .map_err(|e| EchoError::Storage(format!("Failed to inspect schema: {}", e)))?;
        if !has_reports {
            return Err(EchoError::Storage("Schema does not define a reports table".into()));
        }

        debug!(path = %path.display(), "Report store ready");
        Ok(store)
    }

    pub(crate) fn connect(&self) -> Result<Connection, EchoError> {
        Connection::open(&self.path)
            .map_err(|e| EchoError::Storage(format!("Failed to open database {}: {}", self.path.display(), e)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("echo.db");
        let store = ReportStore::open_bundled(&path).unwrap();
        assert!(path.exists());
        assert_eq!(store.path(), path.as_path());
    }

    #[test]
    fn test_open_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("echo.db");
        ReportStore::open_bundled(&path).unwrap();
        ReportStore::open_bundled(&path).unwrap();
    }

    #[test]
    fn test_missing_schema_file_is_storage_error() {
        let dir = TempDir::new().unwrap();
        let result = ReportStore::open(dir.path().join("echo.db"), dir.path().join("absent.sql"));
        assert!(matches!(result, Err(EchoError::Storage(_))));
    }

    #[test]
    fn test_broken_schema_is_storage_error() {
        let dir = TempDir::new().unwrap();
        let result = ReportStore::open_with_schema(dir.path().join("echo.db"), "CREATE TABLE reports (");
        assert!(matches!(result, Err(EchoError::Storage(_))));
    }

    #[test]
    fn test_schema_without_reports_table_is_rejected() {
        let dir = TempDir::new().unwrap();
        let result = ReportStore::open_with_schema(
            dir.path().join("echo.db"),
            "CREATE TABLE notes (id INTEGER PRIMARY KEY);",
        );
        match result {
            Err(EchoError::Storage(msg)) => assert!(msg.contains("reports")),
            other => panic!("expected storage error, got {:?}", other),
        }
    }
}
