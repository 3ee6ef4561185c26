use rusqlite::{Connection, OptionalExtension, Result as SqlResult};
use std::path::PathBuf;

/// The Storage wraps the SQLite database that holds all persisted state.
/// Everything the app remembers (the signed-in user, per-user wishlists)
/// lives in a single key-value table, so the persistence mechanism can be
/// swapped without touching the callers.
pub struct Storage {
    conn: Connection,
    db_path: PathBuf,
}

impl Storage {
    /// Create a new Storage instance and initialize the database.
    ///
    /// The database file is created in the user's data directory:
    /// - Linux: ~/.local/share/reading-hub/reading_hub.db
    /// - macOS: ~/Library/Application Support/reading-hub/reading_hub.db
    /// - Windows: %APPDATA%\reading-hub\reading_hub.db
    pub fn new() -> SqlResult<Self> {
        let db_path = Self::get_db_path();

        // Ensure the parent directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .expect("Failed to create application data directory");
        }

        // Open or create the database
        let conn = Connection::open(&db_path)?;

        let storage = Storage { conn, db_path };
        storage.init_schema()?;

        Ok(storage)
    }

    /// Open a database that lives only in memory. Tests use this so
    /// fixtures never touch the real data directory.
    pub fn open_in_memory() -> SqlResult<Self> {
        let conn = Connection::open_in_memory()?;
        let storage = Storage {
            conn,
            db_path: PathBuf::from(":memory:"),
        };
        storage.init_schema()?;
        Ok(storage)
    }

    /// Get the path where the database should be stored
    fn get_db_path() -> PathBuf {
        let mut path = dirs::data_dir()
            .or_else(|| dirs::home_dir())
            .expect("Could not determine user data directory");

        path.push("reading-hub");
        path.push("reading_hub.db");
        path
    }

    /// Initialize the database schema.
    /// A single key-value table is all the persistence this app needs.
    fn init_schema(&self) -> SqlResult<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key     TEXT PRIMARY KEY,
                value   TEXT NOT NULL
            )",
            [],
        )?;

        Ok(())
    }

    /// Get the path to the database file
    pub fn path(&self) -> &PathBuf {
        &self.db_path
    }

    /// Read the value stored under `key`. A key that was never written
    /// reads as None, not an error.
    pub fn get(&self, key: &str) -> SqlResult<Option<String>> {
        self.conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()
    }

    /// Write `value` under `key`, replacing any previous value.
    /// One statement, so readers never observe a half-written value.
    pub fn set(&self, key: &str, value: &str) -> SqlResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            [key, value],
        )?;
        Ok(())
    }

    /// Delete `key`. Deleting an absent key is a no-op.
    pub fn remove(&self, key: &str) -> SqlResult<()> {
        self.conn.execute("DELETE FROM kv WHERE key = ?1", [key])?;
        Ok(())
    }
}

// Implement Debug for better error messages
impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage")
            .field("db_path", &self.db_path)
            .finish()
    }
}
