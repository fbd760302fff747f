//! Shapes.
//!
//! Extending the shape set:
//! - add a new shape module here
//! - add a matching variant to [`GeometryDescriptor`](crate::scene::GeometryDescriptor)
//! - implement [`Shape`] for the new type
//!
//! Drivers and platform sinks are untouched by a new shape.

mod line;
mod polygon;

pub use line::Line;
pub use polygon::Polygon;

use core::fmt;

use crate::driver::Driver;
use crate::error::SubmitStatus;
use crate::scene::GeometryDescriptor;

/// A renderable shape owning its dispatch chain.
///
/// Concrete shapes hold geometry fields plus exactly one boxed driver. The
/// provided methods do the delegation, so no shape ever inspects the
/// concrete driver type.
pub trait Shape: fmt::Debug {
    /// Serializes the current geometry fields into a fresh descriptor.
    fn descriptor(&self) -> GeometryDescriptor;

    /// The owned driver.
    fn driver(&self) -> &dyn Driver;

    fn driver_mut(&mut self) -> &mut dyn Driver;

    /// Replaces the owned driver, dropping the previous one. Geometry fields
    /// are untouched.
    fn set_driver(&mut self, driver: Box<dyn Driver>);

    /// Builds a descriptor from the current geometry and forwards it to the
    /// owned driver, returning the submission status unchanged.
    fn render(&mut self) -> SubmitStatus {
        let descriptor = self.descriptor();
        self.driver_mut().dispatch(descriptor)
    }

    /// Current binding chain, e.g. `Shape -> Vulkan -> System`.
    /// For inspection and logging only; never used for dispatch.
    fn config_string(&self) -> String {
        format!("Shape -> {} -> System", self.driver().tag())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::driver::{DirectX, EncodedPayload, OpenGl, Vulkan};
    use crate::error::SubmitError;
    use crate::platform::{Linux, System};

    use super::*;

    /// Sink that appends every payload to a shared transcript.
    #[derive(Debug)]
    struct Recorder {
        label: &'static str,
        transcript: Rc<RefCell<Vec<String>>>,
    }

    impl Recorder {
        fn new(label: &'static str) -> (Self, Rc<RefCell<Vec<String>>>) {
            let transcript = Rc::new(RefCell::new(Vec::new()));
            (Self { label, transcript: Rc::clone(&transcript) }, transcript)
        }
    }

    impl System for Recorder {
        fn name(&self) -> &'static str {
            self.label
        }

        fn submit(&mut self, payload: EncodedPayload) -> SubmitStatus {
            self.transcript.borrow_mut().push(payload.into_string());
            Ok(())
        }
    }

    /// Sink that fails every submission.
    #[derive(Debug)]
    struct LostDevice;

    impl System for LostDevice {
        fn name(&self) -> &'static str {
            "LostDevice"
        }

        fn submit(&mut self, _payload: EncodedPayload) -> SubmitStatus {
            Err(SubmitError::DeviceLost { system: self.name().into() })
        }
    }

    // ── full-chain dispatch ───────────────────────────────────────────────

    #[test]
    fn line_over_opengl_reaches_the_linux_sink() {
        let (recorder, transcript) = Recorder::new("Linux");
        let mut line =
            Line::new(Box::new(OpenGl::new(Box::new(recorder))), 0.0, 0.0, 10.0, 10.0);

        assert_eq!(line.driver().system().name(), "Linux");
        assert_eq!(line.render(), Ok(()));
        assert_eq!(
            transcript.borrow().as_slice(),
            ["OpenGL_Line[0.000000,0.000000 to 10.000000,10.000000]"],
        );
    }

    #[test]
    fn repeated_renders_submit_identical_payloads() {
        let (recorder, transcript) = Recorder::new("Linux");
        let mut poly = Polygon::new(Box::new(Vulkan::new(Box::new(recorder))), 8);

        poly.render().unwrap();
        poly.render().unwrap();

        let transcript = transcript.borrow();
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[0], transcript[1]);
    }

    // ── rebinding ─────────────────────────────────────────────────────────

    #[test]
    fn polygon_rebind_changes_tag_and_destination_only() {
        let (windows, windows_tx) = Recorder::new("Windows");
        let mut poly = Polygon::new(Box::new(DirectX::new(Box::new(windows))), 6);

        assert_eq!(poly.render(), Ok(()));
        assert_eq!(windows_tx.borrow().as_slice(), ["DirectX_Polygon[6 vertices]"]);

        let (macos, macos_tx) = Recorder::new("MacOS");
        poly.set_driver(Box::new(Vulkan::new(Box::new(macos))));

        assert_eq!(poly.vertex_count(), 6);
        assert_eq!(poly.render(), Ok(()));
        assert_eq!(macos_tx.borrow().as_slice(), ["Vulkan_Polygon[6 vertices]"]);
    }

    #[test]
    fn rebinding_the_sink_leaves_shape_and_driver_alone() {
        let (first, first_tx) = Recorder::new("first");
        let mut line =
            Line::new(Box::new(OpenGl::new(Box::new(first))), 1.0, 2.0, 3.0, 4.0);
        line.render().unwrap();

        let (second, second_tx) = Recorder::new("second");
        line.driver_mut().set_system(Box::new(second));
        line.render().unwrap();

        assert_eq!(line.endpoints(), (1.0, 2.0, 3.0, 4.0));
        assert_eq!(line.driver().tag(), "OpenGL");
        assert_eq!(first_tx.borrow().as_slice(), second_tx.borrow().as_slice());
    }

    // ── failure propagation ───────────────────────────────────────────────

    #[test]
    fn sink_failure_surfaces_unchanged_from_render() {
        let mut line =
            Line::new(Box::new(Vulkan::new(Box::new(LostDevice))), 1.0, 2.0, 3.0, 4.0);

        let err = line.render().unwrap_err();
        assert_eq!(err, SubmitError::DeviceLost { system: "LostDevice".into() });

        // No state corruption: geometry and driver binding are intact, and a
        // healthy sink succeeds afterwards.
        assert_eq!(line.endpoints(), (1.0, 2.0, 3.0, 4.0));
        assert_eq!(line.driver().tag(), "Vulkan");
        line.driver_mut().set_system(Box::new(Linux::new()));
        assert_eq!(line.render(), Ok(()));
    }

    // ── diagnostics ───────────────────────────────────────────────────────

    #[test]
    fn config_string_tracks_the_driver_binding() {
        let mut line =
            Line::new(Box::new(OpenGl::new(Box::new(Linux::new()))), 0.0, 0.0, 1.0, 1.0);
        assert_eq!(line.config_string(), "Shape -> OpenGL -> System");

        line.set_driver(Box::new(Vulkan::new(Box::new(Linux::new()))));
        assert_eq!(line.config_string(), "Shape -> Vulkan -> System");
    }

    // ── additive extensibility ────────────────────────────────────────────

    /// A driver defined outside the shipped set; composes with existing
    /// shapes and sinks without touching their source.
    #[derive(Debug)]
    struct Metal {
        system: Box<dyn System>,
    }

    impl Driver for Metal {
        fn tag(&self) -> &'static str {
            "Metal"
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

    #[test]
    fn foreign_driver_and_sink_compose_with_shipped_shapes() {
        let (recorder, transcript) = Recorder::new("Headless");
        let mut poly = Polygon::new(Box::new(Metal { system: Box::new(recorder) }), 3);

        assert_eq!(poly.render(), Ok(()));
        assert_eq!(transcript.borrow().as_slice(), ["Metal_Polygon[3 vertices]"]);
    }
}
