//! Graphics driver layer.
//!
//! Drivers sit between shapes and platform sinks: they take a
//! driver-agnostic [`GeometryDescriptor`], wrap it with their fixed tag, and
//! forward the encoded payload to the sink they own. Encoding is a pure
//! function of the descriptor and the tag, so identical inputs always
//! produce byte-identical payloads.
//!
//! Extending the driver set:
//! - add a new driver module here
//! - implement [`Driver`] for the new type (a tag plus an owned sink)
//!
//! Shapes and platform sinks are untouched by a new driver.

mod directx;
mod opengl;
mod vulkan;

pub use directx::DirectX;
pub use opengl::OpenGl;
pub use vulkan::Vulkan;

use core::fmt;

use crate::error::SubmitStatus;
use crate::platform::System;
use crate::scene::GeometryDescriptor;

/// Encoded, single-use submission payload.
///
/// Produced by [`Driver::encode`] and moved into the terminal sink; no layer
/// retains it after submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedPayload(String);

impl EncodedPayload {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for EncodedPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Driver-specific encoding and forwarding.
///
/// Concrete drivers supply a tag and an owned platform sink; the provided
/// methods do the encoding and dispatch, so every driver produces payloads
/// of the same shape (`<tag>_<descriptor>`) and forwards the sink's status
/// unchanged.
pub trait Driver: fmt::Debug {
    /// Fixed tag prefixed onto every payload this driver encodes.
    fn tag(&self) -> &'static str;

    /// The owned platform sink.
    fn system(&self) -> &dyn System;

    fn system_mut(&mut self) -> &mut dyn System;

    /// Replaces the owned platform sink, dropping the previous one.
    fn set_system(&mut self, system: Box<dyn System>);

    /// Wraps the descriptor with this driver's tag.
    fn encode(&self, descriptor: &GeometryDescriptor) -> EncodedPayload {
        EncodedPayload::new(format!("{}_{}", self.tag(), descriptor))
    }

    /// Encodes the descriptor and submits it to the owned sink, returning
    /// the sink's status unchanged.
    fn dispatch(&mut self, descriptor: GeometryDescriptor) -> SubmitStatus {
        let payload = self.encode(&descriptor);
        self.system_mut().submit(payload)
    }
}
