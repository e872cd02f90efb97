use crate::math::Ray;

mod sphere;

pub use sphere::Sphere;

pub trait Primitive {
    /// Both roots `(t0, t1)` with `t0 <= t1` where the ray's line meets the
    /// surface. Roots behind the origin are returned as-is.
    fn intersect(&self, r: Ray) -> Option<(f32, f32)>;
}
