use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use phong_tracer::render::Wall;
use phong_tracer::{hit, lighting, point, Color, IdAllocator, Material, PointLight, Sphere};

const CANVAS_PIXELS: u32 = 512;
const WALL_Z: f64 = 10.;
const WALL_SIZE: f64 = 7.;

/// Renders a Phong-shaded unit sphere lit from the upper left.
#[derive(Parser)]
struct Args {
    #[arg(short, long, default_value = "shadedsphere.ppm")]
    output: PathBuf,
    /// Also write a PNG next to the PPM
    #[arg(long)]
    png: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let sphere = Sphere::new(&IdAllocator::new())
        .with_material(Material::default().with_color(Color::new(1., 0.2, 1.)));
    let light = PointLight::new(point(-10., 10., -10.), Color::WHITE);
    let wall = Wall::new(point(0., 0., -5.), WALL_Z, WALL_SIZE, CANVAS_PIXELS);

    let canvas = wall.render(|ray| {
        hit(&sphere.intersect(ray)).map(|i| {
            let p = ray.position(i.t);
            let normal = i.object.normal_at(&p);
            lighting(&i.object.material, &light, &p, &-ray.direction, &normal)
        })
    });

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
