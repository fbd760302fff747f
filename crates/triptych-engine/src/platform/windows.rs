use crate::driver::EncodedPayload;
use crate::error::SubmitStatus;

use super::System;

/// Windows submission sink.
#[derive(Debug, Default)]
pub struct Windows;

impl Windows {
    pub fn new() -> Self {
        Self
    }
}

impl System for Windows {
    fn name(&self) -> &'static str {
        "Windows"
    }

    fn submit(&mut self, payload: EncodedPayload) -> SubmitStatus {
        log::debug!("{}: submit {}", self.name(), payload);
        Ok(())
    }
}
