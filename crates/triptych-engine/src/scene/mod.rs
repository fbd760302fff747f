//! Scene (shape layer) types.
//!
//! Responsibilities:
//! - hold shape-specific geometry
//! - serialize geometry into driver-agnostic descriptors
//! - delegate submission to the owned driver without inspecting its type
//!
//! Shape-specific code is isolated per shape file under `scene::shapes`.

mod descriptor;

pub mod shapes;

pub use descriptor::GeometryDescriptor;
pub use shapes::{Line, Polygon, Shape};
