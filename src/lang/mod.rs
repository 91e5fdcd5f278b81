/*!
# Rust Language Module

This Rust module knows the ZX81 BASIC program format: token bytes,
their printed forms, and how a line number is labelled.

*/

pub type LineNumber = u16;

#[macro_use]
mod error;
mod glyph;
mod line;

pub use error::Error;
pub use error::ErrorCode;
pub use glyph::Charset;
pub use line::{label, MAX_LINE_NUMBER, MAX_START_LINE};
pub use token::Token;

pub mod token;
