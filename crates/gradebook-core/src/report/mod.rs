//! Report rendering.
//!
//! Four independent renderers, each a pure function returning the formatted
//! text. Writing to the terminal is the caller's job, so tests assert on the
//! returned strings instead of captured output.

mod console;

pub use console::*;
