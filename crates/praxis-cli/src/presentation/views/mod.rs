pub mod collection;
pub mod favorites;
pub mod item;
pub mod mutation;
pub mod system;
