use core::fmt;

/// Driver-agnostic geometry descriptor.
///
/// Produced fresh on every render call and never mutated afterwards. The
/// `Display` form is the boundary contract consumed by drivers:
/// `Line[<x1>,<y1> to <x2>,<y2>]` with six-decimal floats, and
/// `Polygon[<n> vertices]`.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryDescriptor {
    Line { x1: f32, y1: f32, x2: f32, y2: f32 },
    Polygon { vertex_count: u32 },
}

impl fmt::Display for GeometryDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line { x1, y1, x2, y2 } => {
                write!(f, "Line[{x1:.6},{y1:.6} to {x2:.6},{y2:.6}]")
            }
            Self::Polygon { vertex_count } => {
                write!(f, "Polygon[{vertex_count} vertices]")
            }
        }
    }
}
