/*!
# Rust Language Module

This Rust module holds the source-text level of Tiny BASIC:
program lines and the errors the interpreter can report.

*/

/// Program line number. `None` is the unnumbered workspace line.
pub type LineNumber = Option<u16>;

#[macro_use]
mod error;
mod line;

pub use error::Error;
pub use error::ErrorCode;
pub use line::Line;
