// SQLite resource store
// Raw item JSON is the source of truth; a few projected columns exist only
// so the store can filter, search and sort without parsing every body.

mod db;
mod error;
mod queries;
mod records;
mod schema;

// Public API
pub use db::Database;
pub use error::{Error, Result};
pub use records::ItemRecord;
