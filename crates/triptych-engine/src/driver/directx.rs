use crate::platform::System;

use super::Driver;

/// DirectX driver. Tags payloads with `DirectX`.
#[derive(Debug)]
pub struct DirectX {
    system: Box<dyn System>,
}

impl DirectX {
    pub fn new(system: Box<dyn System>) -> Self {
        Self { system }
    }
}

impl Driver for DirectX {
    fn tag(&self) -> &'static str {
        "DirectX"
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
