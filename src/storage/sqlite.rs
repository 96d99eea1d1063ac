//! SQLite storage implementation

use std::path::Path;

use rusqlite::{Connection, params};

use super::schema;
use crate::Result;
use crate::item::Item;

/// SQLite-backed storage for the item list
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open a database file, creating it and its parent directory if
    /// they don't exist
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    /// Insert one item, returning the identifier the store assigned.
    ///
    /// Inputs are bound parameters; they are never interpolated into the
    /// query string.
    pub fn insert_item(&self, name: &str, quantity: i64) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO items (name, quantity) VALUES (?1, ?2)",
            params![name, quantity],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Fetch every item in rowid (insertion) order.
    ///
    /// An empty store yields an empty vec, not an error.
    pub fn fetch_all(&self) -> Result<Vec<Item>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, quantity FROM items")?;

        let items = stmt
            .query_map([], |row| Self::row_to_item(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(items)
    }

    /// Helper to convert a row to an Item
    fn row_to_item(row: &rusqlite::Row) -> rusqlite::Result<Item> {
        Ok(Item {
            id: row.get(0)?,
            name: row.get(1)?,
            quantity: row.get(2)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_from_empty_store() {
        let store = SqliteStore::open_in_memory().unwrap();

        let items = store.fetch_all().unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_insert_and_fetch() {
        let store = SqliteStore::open_in_memory().unwrap();

        let id = store.insert_item("Apples", 5).unwrap();
        assert!(id > 0);

        let items = store.fetch_all().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, id);
        assert_eq!(items[0].name, "Apples");
        assert_eq!(items[0].quantity, 5);
    }

    #[test]
    fn test_fetch_preserves_insertion_order() {
        let store = SqliteStore::open_in_memory().unwrap();

        store.insert_item("Apples", 5).unwrap();
        store.insert_item("Bananas", 12).unwrap();
        store.insert_item("Coffee", 1).unwrap();

        let names: Vec<String> = store
            .fetch_all()
            .unwrap()
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, vec!["Apples", "Bananas", "Coffee"]);
    }

    #[test]
    fn test_duplicate_names_allowed() {
        let store = SqliteStore::open_in_memory().unwrap();

        let first = store.insert_item("Apples", 5).unwrap();
        let second = store.insert_item("Apples", 3).unwrap();
        assert_ne!(first, second);

        assert_eq!(store.fetch_all().unwrap().len(), 2);
    }

    #[test]
    fn test_items_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("pantry.db");

        {
            let store = SqliteStore::open(&db_path).unwrap();
            store.insert_item("Apples", 5).unwrap();
        }

        let store = SqliteStore::open(&db_path).unwrap();
        let items = store.fetch_all().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Apples");
    }

    #[test]
    fn test_open_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("nested").join("deeper").join("pantry.db");

        let store = SqliteStore::open(&db_path).unwrap();
        store.insert_item("Apples", 5).unwrap();
        assert!(db_path.exists());
    }

    #[test]
    fn test_schema_init_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("pantry.db");

        let _first = SqliteStore::open(&db_path).unwrap();
        let second = SqliteStore::open(&db_path).unwrap();
        assert!(second.fetch_all().unwrap().is_empty());
    }
}
