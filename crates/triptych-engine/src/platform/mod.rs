//! Platform submission sinks.
//!
//! The terminal layer of the dispatch chain: a sink takes an already-encoded
//! payload and performs (here: simulates) the platform submission, returning
//! a status that travels back up unchanged.
//!
//! Extending the platform set:
//! - add a new sink module here
//! - implement [`System`] for the new type
//!
//! Shapes and drivers are untouched by a new sink.

mod linux;
mod macos;
mod windows;

pub use linux::Linux;
pub use macos::MacOs;
pub use windows::Windows;

use core::fmt;

use crate::driver::EncodedPayload;
use crate::error::SubmitStatus;

/// Terminal sink for encoded payloads.
///
/// A system carries no state across calls besides a fixed identity label;
/// `submit` may be invoked any number of times with different payloads.
pub trait System: fmt::Debug {
    /// Fixed identity label, used for diagnostics only.
    fn name(&self) -> &'static str;

    /// Performs (or simulates) platform submission of an already-encoded
    /// payload. The payload arrives exactly as the driver produced it.
    fn submit(&mut self, payload: EncodedPayload) -> SubmitStatus;
}
