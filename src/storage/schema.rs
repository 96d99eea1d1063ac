//! Database schema definitions

/// SQL to create the items table
pub const CREATE_ITEMS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    quantity INTEGER NOT NULL
)
"#;

/// All schema creation statements, each idempotent
pub fn all_schema_statements() -> Vec<&'static str> {
    vec![CREATE_ITEMS_TABLE]
}
