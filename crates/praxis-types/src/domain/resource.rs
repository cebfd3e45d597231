use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Remote collections a view-model can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    /// Services offered by a practitioner (sessions, workshops, packages)
    Services,
    /// Bookings made against services
    Bookings,
    /// Posts published to a practitioner's content stream
    StreamPosts,
    /// Public practitioner profiles (discovery pages)
    Practitioners,
}

impl Resource {
    pub const ALL: [Resource; 4] = [
        Resource::Services,
        Resource::Bookings,
        Resource::StreamPosts,
        Resource::Practitioners,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Services => "services",
            Resource::Bookings => "bookings",
            Resource::StreamPosts => "stream_posts",
            Resource::Practitioners => "practitioners",
        }
    }

    /// Whether items of this resource carry the two-state active/draft flag
    pub fn supports_status_toggle(&self) -> bool {
        matches!(self, Resource::Services | Resource::StreamPosts)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "services" | "service" => Ok(Resource::Services),
            "bookings" | "booking" => Ok(Resource::Bookings),
            "stream_posts" | "streams" | "stream" | "posts" => Ok(Resource::StreamPosts),
            "practitioners" | "practitioner" => Ok(Resource::Practitioners),
            other => Err(Error::UnknownResource(other.to_string())),
        }
    }
}

/// Identifier of one remote item.
///
/// Remote APIs hand out both integer primary keys and string ids; both are
/// normalized to their string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<i64> for ItemId {
    fn from(n: i64) -> Self {
        Self(n.to_string())
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Identifier of the authenticated actor (practitioner) scoping dashboard queries
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(String);

impl ActorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
