mod intent;
mod item;
mod money;
mod query;
mod resource;
mod status;

pub use intent::*;
pub use item::*;
pub use money::*;
pub use query::*;
pub use resource::*;
pub use status::*;
