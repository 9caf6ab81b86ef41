//! Geometric primitives built on points and vectors.

mod line;
mod ray;
mod rect;
mod sphere;

pub use line::Line;
pub use ray::Ray;
pub use rect::Rect;
pub use sphere::{Circle, NSphere, Sphere};
