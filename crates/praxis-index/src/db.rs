use chrono::{SecondsFormat, Utc};
use praxis_types::{ActorId, ItemId, ListQuery, RawItem, RemotePage, Resource};
use rusqlite::Connection;
use serde_json::json;
use std::path::Path;
use tracing::debug;

use crate::{Error, Result, queries, records::ItemRecord, schema};

const CREATED_AT_KEYS: &[&str] = &["created_at", "createdAt", "created"];

pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(db_path)?;
        schema::init_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        schema::init_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Drop every item and favorite and recreate empty tables.
    pub fn reset(&self) -> Result<()> {
        debug!("resetting item store");
        schema::drop_all_tables(&self.conn)?;
        schema::init_schema(&self.conn)
    }

    // Item operations

    /// Store a new item. The store assigns the id and stamps `created_at`
    /// when the body carries none.
    pub fn insert_item(
        &self,
        resource: Resource,
        practitioner: Option<&ActorId>,
        body: RawItem,
    ) -> Result<ItemRecord> {
        let mut body = body;
        if body.first_of(CREATED_AT_KEYS).is_none() {
            body.insert("created_at", json!(now_rfc3339()));
        }
        let practitioner_id = practitioner.map(|p| p.as_str().to_string());

        let id = queries::items::insert(&self.conn, resource, practitioner_id.as_deref(), &body)?;
        Ok(ItemRecord {
            id,
            resource,
            practitioner_id,
            body,
        })
    }

    pub fn get_item(&self, resource: Resource, id: i64) -> Result<Option<ItemRecord>> {
        queries::items::get_by_id(&self.conn, resource, id)
    }

    /// Shallow-merge `patch` into the stored body.
    pub fn update_item(&self, resource: Resource, id: i64, patch: &RawItem) -> Result<ItemRecord> {
        let mut record = self
            .get_item(resource, id)?
            .ok_or_else(|| Error::NotFound(format!("{}/{}", resource, id)))?;

        for (key, value) in patch.as_map() {
            if key == "id" {
                continue;
            }
            record.body.insert(key.clone(), value.clone());
        }

        if !queries::items::replace_body(&self.conn, resource, id, &record.body)? {
            return Err(Error::NotFound(format!("{}/{}", resource, id)));
        }
        Ok(record)
    }

    pub fn delete_item(&self, resource: Resource, id: i64) -> Result<bool> {
        queries::items::soft_delete(&self.conn, resource, id)
    }

    pub fn list_items(&self, query: &ListQuery) -> Result<RemotePage> {
        queries::items::list(&self.conn, query)
    }

    pub fn count_items(&self, resource: Resource) -> Result<u64> {
        queries::items::count(&self.conn, resource)
    }

    // Favorite operations

    pub fn list_favorites(&self, actor: &ActorId) -> Result<Vec<ItemId>> {
        let ids = queries::favorites::list(&self.conn, actor.as_str())?;
        Ok(ids.into_iter().map(ItemId::new).collect())
    }

    pub fn add_favorite(&self, actor: &ActorId, item: &ItemId) -> Result<bool> {
        queries::favorites::add(&self.conn, actor.as_str(), item.as_str(), &now_rfc3339())
    }

    pub fn remove_favorite(&self, actor: &ActorId, item: &ItemId) -> Result<bool> {
        queries::favorites::remove(&self.conn, actor.as_str(), item.as_str())
    }
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
