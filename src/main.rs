use std::error::Error;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use log::{error, info, LevelFilter};
use structopt::StructOpt;

use sphere_tracer::config::RenderConfig;
use sphere_tracer::renderer::Renderer;
use sphere_tracer::tonemap::{self, MaxChannel, Tonemapper};
use sphere_tracer::{logger, parsing};

#[derive(Debug, StructOpt)]
#[structopt(name = "sphere_tracer", about = "Whitted style sphere ray tracer")]
struct Opt {
    /// Scene file, one sphere per line. `.json` selects the structured form
    #[structopt(long, parse(from_os_str), default_value = "scene.txt")]
    scene: PathBuf,

    /// Settings file: ambient light, canvas size, max reflection depth
    #[structopt(long, parse(from_os_str), default_value = "settings.txt")]
    settings: PathBuf,

    #[structopt(short, long, parse(from_os_str), default_value = "image.png")]
    output: PathBuf,

    /// Also write the linear float buffer as OpenEXR
    #[structopt(long, parse(from_os_str))]
    hdr: Option<PathBuf>,

    /// Worker threads, 0 for one per logical cpu
    #[structopt(short, long, default_value = "0")]
    threads: usize,

    /// Vertical field of view in degrees
    #[structopt(long, default_value = "30")]
    fov: f32,

    #[structopt(long)]
    progress: bool,

    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,
}

fn run(opt: Opt) -> Result<(), Box<dyn Error>> {
    let scene = parsing::load_scene(&opt.scene)?;
    let config =
        parsing::load_settings(&opt.settings, RenderConfig::default())?.with_fov(opt.fov);
    info!(
        "{}x{} canvas, max depth {}, ambient {:?}",
        config.width, config.height, config.max_depth, config.ambient
    );

    let renderer = Renderer::new(&config, opt.threads)?.with_progress(opt.progress);
    info!("rendering with {} threads", renderer.threads());

    let start = Instant::now();
    let (film, stats) = renderer.render(&scene);
    let rgba = MaxChannel.quantize(&film);
    info!("rendering time: {:.6} s", start.elapsed().as_secs_f64());
    info!(
        "{} primary, {} reflection, {} shadow rays",
        stats.primary_rays, stats.reflection_rays, stats.shadow_rays
    );

    if let Some(hdr) = &opt.hdr {
        tonemap::write_exr(hdr, &film)?;
    }
    drop(film);

    tonemap::write_png(&opt.output, config.width as usize, config.height as usize, &rgba)
}

fn main() {
    let opt = Opt::from_args();
    logger::init_logger(opt.log_level);

    if let Err(e) = run(opt) {
        error!("{}", e);
        process::exit(1);
    }
}
