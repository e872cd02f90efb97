use log::warn;

use crate::geometry::Sphere;
use crate::math::{Color, Point3};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PrimitiveData {
    Sphere {
        center: [f32; 3],
        radius: f32,
        color: [f32; 3],
        #[serde(default)]
        reflectivity: f32,
        #[serde(default)]
        emission: [f32; 3],
    },
}

impl PrimitiveData {
    /// `None` for records that would violate a primitive's invariants.
    pub fn transform(self) -> Option<Sphere> {
        match self {
            Self::Sphere {
                center,
                radius,
                color,
                reflectivity,
                emission,
            } => {
                if !(radius > 0.0) {
                    warn!("sphere at {:?} has non-positive radius {}", center, radius);
                    return None;
                }
                Some(Sphere::new(
                    Point3::from(center),
                    radius,
                    Color::from(color),
                    reflectivity,
                    Color::from(emission),
                ))
            }
        }
    }
}
