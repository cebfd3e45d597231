use rusqlite::Connection;

use crate::Result;

// Schema version (increment when changing table definitions)
pub const SCHEMA_VERSION: i32 = 3;

// NOTE: Store Design Rationale
//
// Why keep the raw body instead of normalized columns?
// - Remote payload shapes drift (camelCase vs snake_case, cents vs formatted strings)
// - The client projection is the one place that understands those shapes
// - Derived columns are recomputed from the body on every write, never edited directly
//
// Why soft delete (is_valid flag)?
// - Favorites may still point at a deleted item; rows stay resolvable for audit
// - UPDATE instead of a multi-table cascade

pub fn init_schema(conn: &Connection) -> Result<()> {
    let current_version: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

    if current_version != SCHEMA_VERSION {
        drop_all_tables(conn)?;
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS items (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            resource TEXT NOT NULL,
            practitioner_id TEXT,
            body TEXT NOT NULL,
            title TEXT NOT NULL,
            category TEXT NOT NULL,
            status TEXT NOT NULL,
            price_cents INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            search_text TEXT NOT NULL,
            is_valid BOOLEAN DEFAULT 1
        );

        CREATE TABLE IF NOT EXISTS favorites (
            actor_id TEXT NOT NULL,
            item_id TEXT NOT NULL,
            added_at TEXT NOT NULL,
            PRIMARY KEY (actor_id, item_id)
        );

        CREATE INDEX IF NOT EXISTS idx_items_resource ON items(resource, is_valid);
        CREATE INDEX IF NOT EXISTS idx_items_practitioner ON items(practitioner_id);
        CREATE INDEX IF NOT EXISTS idx_items_created ON items(created_at DESC);
        "#,
    )?;

    conn.execute(&format!("PRAGMA user_version = {}", SCHEMA_VERSION), [])?;

    Ok(())
}

pub fn drop_all_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        DROP TABLE IF EXISTS favorites;
        DROP TABLE IF EXISTS items;
        "#,
    )?;
    Ok(())
}
