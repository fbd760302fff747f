use crate::driver::EncodedPayload;
use crate::error::SubmitStatus;

use super::System;

/// macOS submission sink.
#[derive(Debug, Default)]
pub struct MacOs;

impl MacOs {
    pub fn new() -> Self {
        Self
    }
}

impl System for MacOs {
    fn name(&self) -> &'static str {
        "MacOS"
    }

    fn submit(&mut self, payload: EncodedPayload) -> SubmitStatus {
        log::debug!("{}: submit {}", self.name(), payload);
        Ok(())
    }
}
