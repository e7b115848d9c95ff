//! lsq - Logseq journals from the terminal
//!
//! Resolves (and creates) today's journal file inside a Logseq vault, opens it
//! in an external editor or a built-in terminal editor, and cycles TODO
//! states and priorities on outliner lines.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod tui;

pub use error::LsqError;
