mod ray;
mod vec;

pub use ray::*;
pub use vec::*;

/// Points share the vector representation.
pub type Point3 = Vec3;

/// Linear RGB, unbounded above until tonemapped.
pub type Color = Vec3;
