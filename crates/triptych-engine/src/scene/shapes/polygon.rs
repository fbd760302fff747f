use crate::driver::Driver;
use crate::scene::GeometryDescriptor;

use super::Shape;

/// Regular polygon described by its vertex count.
#[derive(Debug)]
pub struct Polygon {
    vertex_count: u32,
    driver: Box<dyn Driver>,
}

impl Polygon {
    /// # Panics
    /// Panics if `vertex_count` is zero; a zero-vertex polygon is a
    /// construction bug, not a runtime condition.
    pub fn new(driver: Box<dyn Driver>, vertex_count: u32) -> Self {
        assert!(vertex_count > 0, "polygon requires at least one vertex");
        Self { vertex_count, driver }
    }

    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }
}

impl Shape for Polygon {
    fn descriptor(&self) -> GeometryDescriptor {
        GeometryDescriptor::Polygon { vertex_count: self.vertex_count }
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
