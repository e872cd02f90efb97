use crate::geometry::Primitive;
use crate::math::{Color, Point3, Ray};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Point3,
    pub radius: f32,
    pub surface_color: Color,
    pub reflectivity: f32,
    /// Nonzero makes the sphere a point light located at `center`.
    pub emission_color: Color,
}

impl Sphere {
    pub fn new(
        center: Point3,
        radius: f32,
        surface_color: Color,
        reflectivity: f32,
        emission_color: Color,
    ) -> Sphere {
        debug_assert!(radius > 0.0, "{}", radius);
        Sphere {
            center,
            radius,
            surface_color,
            reflectivity,
            emission_color,
        }
    }

    pub fn non_emissive(
        center: Point3,
        radius: f32,
        surface_color: Color,
        reflectivity: f32,
    ) -> Sphere {
        Sphere::new(center, radius, surface_color, reflectivity, Color::ZERO)
    }

    pub fn is_emissive(&self) -> bool {
        self.emission_color.norm_squared() > 0.0
    }
}

impl Primitive for Sphere {
    fn intersect(&self, r: Ray) -> Option<(f32, f32)> {
        let l = self.center - r.origin;
        let tca = l.dot(r.direction);
        let d2 = l.norm_squared() - tca * tca;
        let radius2 = self.radius * self.radius;
        if d2 > radius2 {
            return None;
        }
        let thc = (radius2 - d2).sqrt();
        Some((tca - thc, tca + thc))
    }
}
