//! Line-oriented text storage.
//!
//! A [`Buffer`] is an ordered list of [`Line`]s. Each line caches its
//! tab-expanded display text and per-character [`Highlight`] tags, which are
//! recomputed only when that line changes.
//!
//! # Examples
//!
//! ```
//! use scrawl::text::{Buffer, Format};
//!
//! let mut buffer = Buffer::new(Format::new(4, false, None));
//! buffer.insert_char(0, 0, '\t');
//! buffer.insert_char(0, 1, 'x');
//! assert_eq!(buffer.line(0).unwrap().display_text(), "    x");
//! assert!(buffer.is_dirty());
//! ```
//!
//! [`Highlight`]: crate::highlight::Highlight

mod buffer;
mod line;

pub use buffer::{Buffer, Format};
pub use line::Line;
