//! Text maps in, text reports out.
//!
//! Maps are plain text, one character per cell:
//!
//! | Glyph | Cost |
//! |---|---|
//! | `.` | 1 |
//! | `:` | 2 |
//! | `=` | 5 |
//! | `+` | 12 |
//! | `#`, anything else | impassable |
//!
//! [`parse_map`] wraps the text in a sentinel border, so the top-left
//! character of the file is cell `(1, 1)`.

mod loader;
mod render;
pub mod terrain;

pub use loader::{load_map, parse_map, MapError};
pub use render::{format_path, render_map, render_report};
