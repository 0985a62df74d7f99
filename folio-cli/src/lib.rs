//! Library half of the `folio` binary: script parsing, text rendering and
//! the interactive carousel player. Kept out of `main` so it can be tested
//! without a terminal.
#![allow(missing_docs)]

pub mod catalog;
pub mod play;
pub mod render;
pub mod script;

pub use play::{PlayEnd, PlayOptions, Showcase, play};
pub use script::{ScriptCommand, ScriptError};
