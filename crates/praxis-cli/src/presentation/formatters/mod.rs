pub mod style;
pub mod text;

pub use style::{Palette, highlight_matches, stdout_supports_color};
pub use text::{format_date, pad_right, truncate};
