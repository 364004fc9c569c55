use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use phong_tracer::{point, vector, Canvas, Color, Tuple};

const CANVAS_WIDTH: u32 = 900;
const CANVAS_HEIGHT: u32 = 550;

/// Fires a projectile through gravity and wind and plots its path.
#[derive(Parser)]
struct Args {
    #[arg(short, long, default_value = "trajectory.ppm")]
    output: PathBuf,
    /// Also write a PNG next to the PPM
    #[arg(long)]
    png: bool,
}

struct Projectile {
    position: Tuple,
    velocity: Tuple,
}

struct Environment {
    gravity: Tuple,
    wind: Tuple,
}

fn tick(env: &Environment, projectile: &mut Projectile) {
    projectile.position += projectile.velocity;
    projectile.velocity += env.gravity + env.wind;
}

/// Plots every position until the projectile drops below the ground.
fn plot_trajectory(env: &Environment, mut projectile: Projectile, canvas: &mut Canvas) -> usize {
    let mut ticks = 0;
    while projectile.position.y >= 0. {
        tick(env, &mut projectile);
        ticks += 1;
        log::debug!(
            "projectile at ({:.3}, {:.3}, {:.3})",
            projectile.position.x,
            projectile.position.y,
            projectile.position.z
        );
        // image rows grow downward
        let x = projectile.position.x as i32;
        let y = canvas.height() as i32 - projectile.position.y as i32;
        canvas.write_pixel(x, y, Color::RED);
    }
    ticks
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let projectile = Projectile {
        position: point(0., 1., 0.),
        velocity: vector(1., 1.8, 0.).normalize() * 11.25,
    };
    let env = Environment {
        gravity: vector(0., -0.1, 0.),
        wind: vector(-0.01, 0., 0.),
    };

    let mut canvas = Canvas::new(CANVAS_WIDTH, CANVAS_HEIGHT);
    let ticks = plot_trajectory(&env, projectile, &mut canvas);
    log::info!("projectile landed after {} ticks", ticks);

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
