//! Triptych engine crate.
//!
//! A rendering dispatch core with three independently extensible axes:
//! shapes serialize their geometry into driver-agnostic descriptors, drivers
//! encode descriptors into tagged payloads, and platform systems perform the
//! terminal submission. Each layer owns exactly one instance of the layer
//! below and can be rebound at runtime without touching its siblings.

pub mod driver;
pub mod error;
pub mod logging;
pub mod platform;
pub mod scene;
