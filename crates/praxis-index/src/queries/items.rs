use praxis_types::{ListQuery, RawItem, RemotePage, Resource, SortKey};
use rusqlite::{Connection, OptionalExtension, params, params_from_iter};

use crate::{
    Result,
    records::{DerivedColumns, ItemRecord},
};

pub fn insert(
    conn: &Connection,
    resource: Resource,
    practitioner_id: Option<&str>,
    body: &RawItem,
) -> Result<i64> {
    let derived = DerivedColumns::from_body(body);
    let body_json = serde_json::to_string(body)?;

    conn.execute(
        r#"
        INSERT INTO items (resource, practitioner_id, body, title, category, status,
                           price_cents, created_at, search_text, is_valid)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, 1)
        "#,
        params![
            resource.as_str(),
            practitioner_id,
            body_json,
            derived.title,
            derived.category,
            derived.status,
            derived.price_cents,
            derived.created_at,
            derived.search_text,
        ],
    )?;

    Ok(conn.last_insert_rowid())
}

pub fn get_by_id(conn: &Connection, resource: Resource, id: i64) -> Result<Option<ItemRecord>> {
    let row = conn
        .query_row(
            r#"
            SELECT id, practitioner_id, body
            FROM items
            WHERE id = ?1 AND resource = ?2 AND is_valid = 1
            "#,
            params![id, resource.as_str()],
            |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, Option<String>>(1)?,
                    row.get::<_, String>(2)?,
                ))
            },
        )
        .optional()?;

    match row {
        Some((id, practitioner_id, body)) => Ok(Some(ItemRecord {
            id,
            resource,
            practitioner_id,
            body: serde_json::from_str(&body)?,
        })),
        None => Ok(None),
    }
}

/// Replace the stored body and recompute the derived columns.
pub fn replace_body(conn: &Connection, resource: Resource, id: i64, body: &RawItem) -> Result<bool> {
    let derived = DerivedColumns::from_body(body);
    let body_json = serde_json::to_string(body)?;

    let changed = conn.execute(
        r#"
        UPDATE items
        SET body = ?3, title = ?4, category = ?5, status = ?6,
            price_cents = ?7, created_at = ?8, search_text = ?9
        WHERE id = ?1 AND resource = ?2 AND is_valid = 1
        "#,
        params![
            id,
            resource.as_str(),
            body_json,
            derived.title,
            derived.category,
            derived.status,
            derived.price_cents,
            derived.created_at,
            derived.search_text,
        ],
    )?;

    Ok(changed > 0)
}

pub fn soft_delete(conn: &Connection, resource: Resource, id: i64) -> Result<bool> {
    let changed = conn.execute(
        "UPDATE items SET is_valid = 0 WHERE id = ?1 AND resource = ?2 AND is_valid = 1",
        params![id, resource.as_str()],
    )?;
    Ok(changed > 0)
}

pub fn list(conn: &Connection, query: &ListQuery) -> Result<RemotePage> {
    let mut where_clauses = vec!["resource = ?", "is_valid = 1"];
    let mut params: Vec<Box<dyn rusqlite::ToSql>> = vec![Box::new(query.resource.as_str())];

    if let Some(actor) = &query.practitioner {
        where_clauses.push("practitioner_id = ?");
        params.push(Box::new(actor.as_str().to_string()));
    }

    if let Some(category) = &query.category {
        where_clauses.push("category = ? COLLATE NOCASE");
        params.push(Box::new(category.clone()));
    }

    if let Some(status) = query.status {
        where_clauses.push("status = ?");
        params.push(Box::new(status.as_str()));
    }

    if let Some(search) = &query.search {
        where_clauses.push("search_text LIKE ? ESCAPE '\\'");
        params.push(Box::new(format!("%{}%", escape_like(&search.to_lowercase()))));
    }

    let where_clause = where_clauses.join(" AND ");

    let total_count: i64 = conn.query_row(
        &format!("SELECT COUNT(*) FROM items WHERE {}", where_clause),
        params_from_iter(params.iter()),
        |row| row.get(0),
    )?;

    let order_clause = match query.ordering.unwrap_or_default() {
        SortKey::Newest => "ORDER BY created_at IS NULL, created_at DESC, id DESC",
        SortKey::Oldest => "ORDER BY created_at IS NULL, created_at ASC, id ASC",
        SortKey::PriceAsc => "ORDER BY price_cents ASC, id ASC",
        SortKey::PriceDesc => "ORDER BY price_cents DESC, id ASC",
        SortKey::Title => "ORDER BY title COLLATE NOCASE ASC, id ASC",
    };

    let (limit_clause, offset, page) = match (query.page, query.page_size) {
        (Some(page), Some(size)) => {
            let page = page.max(1);
            let size = size.max(1);
            let offset = u64::from(page - 1) * u64::from(size);
            (format!("LIMIT {} OFFSET {}", size, offset), offset, page)
        }
        _ => (String::new(), 0, 1),
    };

    let sql = format!(
        "SELECT id, body FROM items WHERE {} {} {}",
        where_clause, order_clause, limit_clause
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(params.iter()), |row| {
        Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
    })?;

    let mut items = Vec::new();
    for row in rows {
        let (id, body) = row?;
        let record = ItemRecord {
            id,
            resource: query.resource,
            practitioner_id: None,
            body: serde_json::from_str(&body)?,
        };
        items.push(record.into_raw());
    }

    let total_count = total_count.max(0) as u64;
    Ok(RemotePage {
        has_next: offset + (items.len() as u64) < total_count,
        has_prev: page > 1,
        items,
        total_count,
    })
}

pub fn count(conn: &Connection, resource: Resource) -> Result<u64> {
    let n: i64 = conn.query_row(
        "SELECT COUNT(*) FROM items WHERE resource = ?1 AND is_valid = 1",
        params![resource.as_str()],
        |row| row.get(0),
    )?;
    Ok(n.max(0) as u64)
}

fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("100%_off\\"), "100\\%\\_off\\\\");
        assert_eq!(escape_like("yoga"), "yoga");
    }
}
