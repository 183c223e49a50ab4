use crate::storage::migrations::run_migrations;
use crate::DbConnection;
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex};

const IN_MEMORY: &str = ":memory:";

/// Opens the store at `db_path` (or in memory for `:memory:`) and brings the
/// schema up to date.
pub fn initialize_database(db_path: &Path) -> anyhow::Result<DbConnection> {
    let mut conn = if db_path == Path::new(IN_MEMORY) {
        Connection::open_in_memory()?
    } else {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Connection::open(db_path)?
    };

    conn.execute("PRAGMA foreign_keys = ON", [])?;
    run_migrations(&mut conn)?;

    Ok(Arc::new(Mutex::new(conn)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_creates_schema_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("nested/qa.db");

        let connection = initialize_database(&db_path).unwrap();

        assert!(db_path.exists());
        let conn = connection.lock().unwrap();
        let tables: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('questions', 'answers') ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(tables, vec!["answers", "questions"]);

        let foreign_keys: i64 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(foreign_keys, 1);
    }

    #[test]
    fn test_run_migrations_reports_storage_error() {
        let mut conn = Connection::open_in_memory().unwrap();
        conn.execute("CREATE TABLE questions (id INTEGER PRIMARY KEY)", [])
            .unwrap();

        let err = run_migrations(&mut conn).unwrap_err();

        assert!(matches!(err, crate::storage::StorageError::Migration(_)));
    }

    #[test]
    fn test_reopening_existing_database_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("qa.db");

        drop(initialize_database(&db_path).unwrap());
        let connection = initialize_database(&db_path).unwrap();

        let conn = connection.lock().unwrap();
        let applied: i64 = conn
            .query_row("SELECT COUNT(*) FROM refinery_schema_history", [], |row| row.get(0))
            .unwrap();
        assert_eq!(applied, 2);
    }
}
