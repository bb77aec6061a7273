//! Form-facing logic with no rendering attached.
//!
//! Two pieces sit between the document core and whatever front end
//! presents it: a pure classification of values into editing kinds
//! (checkbox-like, bounded number, fixed choice set, free text), and the
//! caller-owned [`EditSession`] that pairs a loaded file with its pending
//! edits. Neither knows anything about widgets.

pub mod classify;
pub mod error;
pub mod session;

pub use classify::{Choice, ValueKind, classify_value};
pub use error::{Error, Result};
pub use session::EditSession;
