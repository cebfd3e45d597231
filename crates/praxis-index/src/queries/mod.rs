pub mod favorites;
pub mod items;
