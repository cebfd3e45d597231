mod fs;
mod memory;

pub use fs::FileStorage;
pub use memory::MemoryStorage;

use crate::Result;

/// String key-value persistence in the style of browser local storage
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}
