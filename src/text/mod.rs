//! Text measurement and wrapping.
//!
//! - [`width`]: cell width of characters and strings
//! - [`wrap`]: fit text into a box by word, character, or no wrapping

pub mod width;
pub mod wrap;

pub use width::{char_width, max_line_width, string_width};
pub use wrap::{ELLIPSIS, Truncation, Wrapped, measure, wrap};
