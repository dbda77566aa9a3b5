//! The line-oriented events file format.
//!
//! Each event is stored as a three-line record followed by a blank separator:
//!
//! ```text
//! Title: Gig at the Roxy
//! Time: 2024-05-01 19:00:00
//! Location: Hall 1
//! ```

mod generate;
mod parse;

pub use generate::{to_text, write_store};
pub use parse::{parse_text, read_store};

/// Render/parse format for the `Time:` field. Locale-independent and
/// second-precision, so rendered stores round-trip.
pub(crate) const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
