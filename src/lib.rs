//! Whitted style ray tracer for scenes made of spheres.
//!
//! Emissive spheres double as point lights. Shading is Lambertian with hard
//! shadows plus mirror reflection bounded by a configured depth.

#[macro_use]
extern crate serde;

pub mod camera;
pub mod config;
pub mod film;
pub mod geometry;
pub mod logger;
pub mod math;
pub mod parsing;
pub mod renderer;
pub mod tonemap;
pub mod tracer;
