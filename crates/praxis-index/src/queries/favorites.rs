use rusqlite::{Connection, params};

use crate::Result;

pub fn list(conn: &Connection, actor_id: &str) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT item_id
        FROM favorites
        WHERE actor_id = ?1
        ORDER BY added_at ASC, item_id ASC
        "#,
    )?;

    let rows = stmt.query_map([actor_id], |row| row.get::<_, String>(0))?;

    let mut ids = Vec::new();
    for row in rows {
        ids.push(row?);
    }
    Ok(ids)
}

/// Returns false when the item was already a favorite.
pub fn add(conn: &Connection, actor_id: &str, item_id: &str, added_at: &str) -> Result<bool> {
    let inserted = conn.execute(
        r#"
        INSERT INTO favorites (actor_id, item_id, added_at)
        VALUES (?1, ?2, ?3)
        ON CONFLICT(actor_id, item_id) DO NOTHING
        "#,
        params![actor_id, item_id, added_at],
    )?;
    Ok(inserted > 0)
}

pub fn remove(conn: &Connection, actor_id: &str, item_id: &str) -> Result<bool> {
    let removed = conn.execute(
        "DELETE FROM favorites WHERE actor_id = ?1 AND item_id = ?2",
        params![actor_id, item_id],
    )?;
    Ok(removed > 0)
}
