use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use phong_tracer::render::Wall;
use phong_tracer::{hit, point, Color, IdAllocator, Sphere};

const CANVAS_PIXELS: u32 = 100;
const WALL_Z: f64 = 10.;
// the sphere's shadow on the wall spans 6 units; leave a margin
const WALL_SIZE: f64 = 7.;

/// Casts rays at a unit sphere and paints its silhouette red.
#[derive(Parser)]
struct Args {
    #[arg(short, long, default_value = "spherecast.ppm")]
    output: PathBuf,
    /// Also write a PNG next to the PPM
    #[arg(long)]
    png: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let sphere = Sphere::new(&IdAllocator::new());
    let wall = Wall::new(point(0., 0., -5.), WALL_Z, WALL_SIZE, CANVAS_PIXELS);
    let canvas = wall.render(|ray| hit(&sphere.intersect(ray)).map(|_| Color::RED));

    canvas
        .write_ppm(&args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;
    log::info!("wrote {}", args.output.display());
    if args.png {
        let png = args.output.with_extension("png");
        canvas
            .save_png(&png)
            .with_context(|| format!("writing {}", png.display()))?;
        log::info!("wrote {}", png.display());
    }
    Ok(())
}
