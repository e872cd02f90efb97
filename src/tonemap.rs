use std::error::Error;
use std::path::Path;

use log::info;
use rayon::prelude::*;

use crate::film::Film;
use crate::math::Color;

pub trait Tonemapper {
    fn map(&self, color: Color) -> [u8; 4];

    /// Interleaved RGBA8 bytes for the whole film, row-major.
    fn quantize(&self, film: &Film<Color>) -> Vec<u8>
    where
        Self: Sync,
    {
        let mut bytes = vec![0u8; film.total_pixels() * 4];
        bytes
            .par_chunks_mut(4)
            .zip(film.buffer.par_iter())
            .for_each(|(out, color)| out.copy_from_slice(&self.map(*color)));
        bytes
    }
}

/// Divides by the largest channel when it exceeds 1, keeping hue, then clamps
/// and truncates to 8 bits with opaque alpha.
#[derive(Copy, Clone, Debug, Default)]
pub struct MaxChannel;

impl Tonemapper for MaxChannel {
    fn map(&self, color: Color) -> [u8; 4] {
        let max = color.max_component();
        let color = if max > 1.0 { color / max } else { color };
        [
            to_byte(color.x),
            to_byte(color.y),
            to_byte(color.z),
            255,
        ]
    }
}

fn to_byte(channel: f32) -> u8 {
    // NaN saturates to 0 in the cast
    (channel.clamp(0.0, 1.0) * 255.0) as u8
}

pub fn write_png(
    path: &Path,
    width: usize,
    height: usize,
    rgba: &[u8],
) -> Result<(), Box<dyn Error>> {
    image::save_buffer(
        path,
        rgba,
        width as u32,
        height as u32,
        image::ColorType::Rgba8,
    )?;
    info!("saved {}", path.display());
    Ok(())
}

/// Linear, untonemapped radiance as 32-bit float OpenEXR.
pub fn write_exr(path: &Path, film: &Film<Color>) -> Result<(), Box<dyn Error>> {
    exr::prelude::write_rgb_file(path, film.width, film.height, |x, y| {
        let c = film.at(x, y);
        (c.x, c.y, c.z)
    })?;
    info!("saved hdr {}", path.display());
    Ok(())
}
