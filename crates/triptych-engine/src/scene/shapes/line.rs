use crate::driver::Driver;
use crate::scene::GeometryDescriptor;

use super::Shape;

/// Line segment between two points.
#[derive(Debug)]
pub struct Line {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
    driver: Box<dyn Driver>,
}

impl Line {
    pub fn new(driver: Box<dyn Driver>, x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2, driver }
    }

    /// Current endpoints as `(x1, y1, x2, y2)`.
    #[inline]
    pub fn endpoints(&self) -> (f32, f32, f32, f32) {
        (self.x1, self.y1, self.x2, self.y2)
    }
}

impl Shape for Line {
    fn descriptor(&self) -> GeometryDescriptor {
        GeometryDescriptor::Line { x1: self.x1, y1: self.y1, x2: self.x2, y2: self.y2 }
    }

    fn driver(&self) -> &dyn Driver {
        self.driver.as_ref()
    }

    fn driver_mut(&mut self) -> &mut dyn Driver {
        self.driver.as_mut()
    }

    fn set_driver(&mut self, driver: Box<dyn Driver>) {
        self.driver = driver;
    }
}
