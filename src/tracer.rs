use crate::config::RenderConfig;
use crate::geometry::{Primitive, Sphere};
use crate::math::{Color, Point3, Ray, Vec3};

pub const BACKGROUND: Color = Color::ZERO;

/// Offset along the hit normal for every secondary ray origin.
pub const BIAS: f32 = 1e-3;

/// Ray counters for one worker. Merged after the pixel loop joins.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TraceStats {
    pub primary_rays: u64,
    pub reflection_rays: u64,
    pub shadow_rays: u64,
    /// Reflective hits shaded diffusely because `max_depth` was reached.
    pub depth_limit_hits: u64,
}

impl TraceStats {
    pub fn merge(self, other: TraceStats) -> TraceStats {
        TraceStats {
            primary_rays: self.primary_rays + other.primary_rays,
            reflection_rays: self.reflection_rays + other.reflection_rays,
            shadow_rays: self.shadow_rays + other.shadow_rays,
            depth_limit_hits: self.depth_limit_hits + other.depth_limit_hits,
        }
    }
}

/// Color seen along `ray`. `ray.direction` is expected to be unit length.
pub fn trace(
    ray: Ray,
    scene: &[Sphere],
    config: &RenderConfig,
    depth: u32,
    stats: &mut TraceStats,
) -> Color {
    let mut tnear = f32::INFINITY;
    let mut nearest: Option<(usize, &Sphere)> = None;

    for (index, sphere) in scene.iter().enumerate() {
        if let Some((t0, t1)) = sphere.intersect(ray) {
            // the far root stands in when the near one is behind the origin,
            // even if it is behind as well.
            let t = if t0 < 0.0 { t1 } else { t0 };
            if t < tnear {
                tnear = t;
                nearest = Some((index, sphere));
            }
        }
    }

    let (index, sphere) = match nearest {
        Some(hit) => hit,
        None => return BACKGROUND,
    };

    let hit_point = ray.point_at_parameter(tnear);
    let mut hit_normal = hit_point - sphere.center;
    hit_normal.normalize();
    let biased_origin = hit_point + hit_normal * BIAS;

    let mut reflection = Color::ZERO;
    let mut surface = Color::ZERO;
    let mut reflection_weight = 0.0;

    if sphere.reflectivity > 0.0 && depth < config.max_depth {
        reflection_weight = sphere.reflectivity;
        let mut reflection_dir =
            ray.direction - hit_normal * 2.0 * ray.direction.dot(hit_normal);
        reflection_dir.normalize();
        stats.reflection_rays += 1;
        reflection = trace(
            Ray::new(biased_origin, reflection_dir),
            scene,
            config,
            depth + 1,
            stats,
        );
    } else {
        if sphere.reflectivity > 0.0 {
            stats.depth_limit_hits += 1;
        }
        surface = direct_lighting(
            index,
            sphere,
            hit_point,
            hit_normal,
            biased_origin,
            scene,
            stats,
        );
    }

    config.ambient * sphere.surface_color
        + sphere.emission_color
        + reflection * reflection_weight
        + (1.0 - reflection_weight) * surface
}

/// Lambertian contribution of every other emissive sphere, treated as a point
/// light at its center with inverse square falloff and a binary shadow test.
fn direct_lighting(
    hit_index: usize,
    sphere: &Sphere,
    hit_point: Point3,
    hit_normal: Vec3,
    shadow_origin: Point3,
    scene: &[Sphere],
    stats: &mut TraceStats,
) -> Color {
    let mut surface = Color::ZERO;

    for (light_index, light) in scene.iter().enumerate() {
        if light_index == hit_index || !light.is_emissive() {
            continue;
        }

        let mut light_dir = light.center - hit_point;
        let distance_squared = light_dir.norm_squared();
        light_dir.normalize();

        let shadow_ray = Ray::new(shadow_origin, light_dir);
        stats.shadow_rays += 1;

        // the light's own near root is the arrival distance.
        let light_distance = light
            .intersect(shadow_ray)
            .map(|(t0, _)| t0)
            .unwrap_or_else(|| distance_squared.sqrt());

        let occluded = scene
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != light_index)
            .any(|(_, other)| match other.intersect(shadow_ray) {
                Some((t0, _)) => t0 > 0.0 && t0 < light_distance,
                None => false,
            });
        if occluded {
            continue;
        }

        let light_angle = light_dir.dot(hit_normal).max(0.0);
        surface += sphere.surface_color * light_angle * light.emission_color
            * (1.0 / distance_squared);
    }

    surface
}
