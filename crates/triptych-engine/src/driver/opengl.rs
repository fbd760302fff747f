use crate::platform::System;

use super::Driver;

/// OpenGL driver. Tags payloads with `OpenGL`.
#[derive(Debug)]
pub struct OpenGl {
    system: Box<dyn System>,
}

impl OpenGl {
    pub fn new(system: Box<dyn System>) -> Self {
        Self { system }
    }
}

impl Driver for OpenGl {
    fn tag(&self) -> &'static str {
        "OpenGL"
    }

    fn system(&self) -> &dyn System {
        self.system.as_ref()
    }

    fn system_mut(&mut self) -> &mut dyn System {
        self.system.as_mut()
    }

    fn set_system(&mut self, system: Box<dyn System>) {
        self.system = system;
    }
}
