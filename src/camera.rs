use crate::config::RenderConfig;
use crate::math::{Point3, Ray, Vec3};

/// Pinhole camera at the origin looking down +Z, +Y up.
pub struct PinholeCamera {
    inv_width: f32,
    inv_height: f32,
    aspect_ratio: f32,
    // tan(fov / 2)
    angle: f32,
}

impl PinholeCamera {
    pub fn from_config(config: &RenderConfig) -> PinholeCamera {
        PinholeCamera {
            inv_width: 1.0 / config.width as f32,
            inv_height: 1.0 / config.height as f32,
            aspect_ratio: config.aspect_ratio(),
            angle: (0.5 * config.fov).to_radians().tan(),
        }
    }

    /// Normalized ray through the center of pixel `(x, y)`, row 0 at the top.
    pub fn get_ray(&self, x: usize, y: usize) -> Ray {
        let screen_x =
            (2.0 * ((x as f32 + 0.5) * self.inv_width) - 1.0) * self.angle * self.aspect_ratio;
        let screen_y = (1.0 - 2.0 * ((y as f32 + 0.5) * self.inv_height)) * self.angle;

        let mut direction = Vec3::new(screen_x, screen_y, 1.0);
        direction.normalize();
        Ray::new(Point3::ZERO, direction)
    }
}
