use crate::driver::EncodedPayload;
use crate::error::SubmitStatus;

use super::System;

/// Linux submission sink.
#[derive(Debug, Default)]
pub struct Linux;

impl Linux {
    pub fn new() -> Self {
        Self
    }
}

impl System for Linux {
    fn name(&self) -> &'static str {
        "Linux"
    }

    fn submit(&mut self, payload: EncodedPayload) -> SubmitStatus {
        log::debug!("{}: submit {}", self.name(), payload);
        Ok(())
    }
}
