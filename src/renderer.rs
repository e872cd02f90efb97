use std::io::Stdout;
use std::sync::Mutex;

use log::debug;
use pbr::ProgressBar;
use rayon::prelude::*;

use crate::camera::PinholeCamera;
use crate::config::RenderConfig;
use crate::film::Film;
use crate::geometry::Sphere;
use crate::math::Color;
use crate::tracer::{trace, TraceStats};

pub struct Renderer<'a> {
    config: &'a RenderConfig,
    pool: rayon::ThreadPool,
    show_progress: bool,
}

impl<'a> Renderer<'a> {
    /// `threads == 0` sizes the pool to the number of logical cpus.
    pub fn new(
        config: &'a RenderConfig,
        threads: usize,
    ) -> Result<Renderer<'a>, rayon::ThreadPoolBuildError> {
        let threads = if threads == 0 { num_cpus::get() } else { threads };
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()?;
        debug!("render pool with {} threads", threads);
        Ok(Renderer {
            config,
            pool,
            show_progress: false,
        })
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Traces one primary ray per pixel. Scanlines are stolen by idle workers,
    /// which evens out rows heavy on reflections and shadow tests.
    pub fn render(&self, scene: &[Sphere]) -> (Film<Color>, TraceStats) {
        let (width, height) = (self.config.width as usize, self.config.height as usize);
        let mut film = Film::new(width, height, Color::ZERO);
        if film.total_pixels() == 0 {
            return (film, TraceStats::default());
        }

        let camera = PinholeCamera::from_config(self.config);
        let config = self.config;
        let progress: Option<Mutex<ProgressBar<Stdout>>> = if self.show_progress {
            let mut pb = ProgressBar::new(height as u64);
            pb.message("scanlines ");
            Some(Mutex::new(pb))
        } else {
            None
        };

        let stats = self.pool.install(|| {
            film.buffer
                .par_chunks_mut(width)
                .enumerate()
                .map(|(y, row)| {
                    let mut stats = TraceStats::default();
                    for (x, pixel) in row.iter_mut().enumerate() {
                        stats.primary_rays += 1;
                        *pixel = trace(camera.get_ray(x, y), scene, config, 0, &mut stats);
                    }
                    if let Some(Ok(mut pb)) = progress.as_ref().map(|pb| pb.lock()) {
                        pb.inc();
                    }
                    stats
                })
                .reduce(TraceStats::default, TraceStats::merge)
        });

        if let Some(Ok(mut pb)) = progress.map(|pb| pb.into_inner()) {
            pb.finish_println("");
        }
        debug!("{:?}", stats);
        (film, stats)
    }
}
