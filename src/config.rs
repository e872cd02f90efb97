use crate::math::Color;

/// Everything the tracer and renderer read besides the scene itself.
/// Built once before rendering and shared by reference.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderConfig {
    pub ambient: Color,
    pub width: u32,
    pub height: u32,
    pub max_depth: u32,
    /// Vertical field of view in degrees.
    pub fov: f32,
}

impl RenderConfig {
    pub const DEFAULT_FOV: f32 = 30.0;

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    pub fn with_fov(mut self, fov: f32) -> Self {
        self.fov = fov;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            ambient: Color::splat(0.2),
            width: 640,
            height: 480,
            max_depth: 5,
            fov: RenderConfig::DEFAULT_FOV,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.ambient, Color::splat(0.2));
        assert_eq!((config.width, config.height), (640, 480));
        assert_eq!(config.max_depth, 5);
        assert_eq!(config.fov, 30.0);
        assert!((config.aspect_ratio() - 4.0 / 3.0).abs() < 1e-6);
        assert_eq!(config.with_fov(45.0).fov, 45.0);
    }
}
