//! Comment-preserving INI document model, parser, and writer.
//!
//! Parses `[Section]` / `Key=Value` configuration text into an addressable
//! model while retaining every comment, blank line, and original line
//! position, then writes edited values back in place so that every
//! untouched line survives byte-for-byte.
//!
//! The model and the raw lines it was parsed from form a pair: write-back
//! is addressed by physical line index, not regenerated structurally, so a
//! `ConfigDocument` is only meaningful together with the exact
//! [`RawDocument`] it came from.

pub mod comment;
pub mod error;
pub mod model;
pub mod parser;
pub mod writer;

pub use error::{Error, Result};
pub use model::{ConfigDocument, ConfigEntry, ConfigSection, RawDocument};
pub use parser::parse;
pub use writer::{EditSet, render};
