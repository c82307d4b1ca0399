//! SQLite database layer for ticklist
//!
//! rusqlite behind a process-wide connection mutex. The schema is not created
//! on open; startup calls [`Database::init_schema`] once before the listener
//! binds.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{ServerError, ServerResult};
use crate::models::Todo;

/// Thread-safe database wrapper
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
    path: PathBuf,
}

impl Database {
    /// Open or create the database file at the given path
    pub fn open(path: impl Into<PathBuf>) -> ServerResult<Self> {
        let path = path.into();

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(&path)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            path,
        })
    }

    /// Open an in-memory database (for testing); the schema is created
    /// eagerly since the store is always fresh
    pub fn open_in_memory() -> ServerResult<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
            path: PathBuf::from(":memory:"),
        };
        db.init_schema()?;
        Ok(db)
    }

    /// Get the database file path
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Get database file size in bytes
    pub fn size_bytes(&self) -> Option<u64> {
        std::fs::metadata(&self.path).ok().map(|m| m.len())
    }

    /// Create the schema if it does not exist yet. Idempotent; safe to call
    /// on every startup.
    pub fn init_schema(&self) -> ServerResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    // ========================================================================
    // Todos
    // ========================================================================

    /// All records, ordered by id ascending
    pub fn list_todos(&self) -> ServerResult<Vec<Todo>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare("SELECT id, title, complete FROM todos ORDER BY id ASC")?;

        let todos = stmt
            .query_map([], |row| {
                Ok(Todo {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    complete: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(todos)
    }

    /// Persist a new record with `complete = false` and a fresh id
    pub fn insert_todo(&self, title: &str) -> ServerResult<Todo> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO todos (title, complete) VALUES (?1, ?2)",
            params![title, false],
        )?;
        let id = conn.last_insert_rowid();

        Ok(Todo {
            id,
            title: title.to_string(),
            complete: false,
        })
    }

    pub fn get_todo(&self, id: i64) -> ServerResult<Option<Todo>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare("SELECT id, title, complete FROM todos WHERE id = ?1")?;

        let todo = stmt
            .query_row(params![id], |row| {
                Ok(Todo {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    complete: row.get(2)?,
                })
            })
            .optional()?;

        Ok(todo)
    }

    /// Load the record, flip `complete`, persist. Read-modify-write under a
    /// single lock acquisition; no explicit transaction.
    pub fn toggle_todo(&self, id: i64) -> ServerResult<Todo> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare("SELECT id, title, complete FROM todos WHERE id = ?1")?;

        let todo = stmt
            .query_row(params![id], |row| {
                Ok(Todo {
                    id: row.get(0)?,
                    title: row.get(1)?,
                    complete: row.get(2)?,
                })
            })
            .optional()?
            .ok_or_else(|| ServerError::NotFound(format!("todo {id} not found")))?;

        let complete = !todo.complete;
        conn.execute(
            "UPDATE todos SET complete = ?1 WHERE id = ?2",
            params![complete, id],
        )?;

        Ok(Todo { complete, ..todo })
    }

    /// Delete the record entirely; a missing id is an error, never a no-op
    pub fn delete_todo(&self, id: i64) -> ServerResult<()> {
        let conn = self.conn.lock().unwrap();
        let deleted = conn.execute("DELETE FROM todos WHERE id = ?1", params![id])?;

        if deleted == 0 {
            return Err(ServerError::NotFound(format!("todo {id} not found")));
        }

        Ok(())
    }
}

// ============================================================================
// Schema
// ============================================================================

const SCHEMA: &str = r#"
-- Todos table: the single table of the application
CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY,
    title VARCHAR(100) NOT NULL,
    complete BOOLEAN NOT NULL DEFAULT 0
);
"#;
