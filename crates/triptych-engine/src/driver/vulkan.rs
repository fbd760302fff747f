use crate::platform::System;

use super::Driver;

/// Vulkan driver. Tags payloads with `Vulkan`.
#[derive(Debug)]
pub struct Vulkan {
    system: Box<dyn System>,
}

impl Vulkan {
    pub fn new(system: Box<dyn System>) -> Self {
        Self { system }
    }
}

impl Driver for Vulkan {
    fn tag(&self) -> &'static str {
        "Vulkan"
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
