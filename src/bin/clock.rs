use std::f64::consts::PI;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use phong_tracer::transform::{about_point, rotation_z};
use phong_tracer::{point, Canvas, Color, Tuple};

const CANVAS_SIZE: u32 = 240;
const RADIUS: f64 = 80.;
const HOURS: u32 = 12;

/// Draws the twelve hour marks of a clock face.
#[derive(Parser)]
struct Args {
    #[arg(short, long, default_value = "clock.ppm")]
    output: PathBuf,
    /// Also write a PNG next to the PPM
    #[arg(long)]
    png: bool,
}

/// Rotates the three o'clock mark about `center` once per hour.
fn hour_marks(center: Tuple, radius: f64) -> phong_tracer::Result<Vec<Tuple>> {
    let three_oclock = point(center.x + radius, center.y, 0.);
    (0..HOURS)
        .map(|hour| {
            let rotation = rotation_z(hour as f64 * 2. * PI / HOURS as f64);
            about_point(&rotation, &center)?.multiply_tuple(&three_oclock)
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut canvas = Canvas::new(CANVAS_SIZE, CANVAS_SIZE);
    let center = point(CANVAS_SIZE as f64 / 2., CANVAS_SIZE as f64 / 2., 0.);
    for mark in hour_marks(center, RADIUS).context("placing hour marks")? {
        canvas.write_pixel(mark.x.round() as i32, mark.y.round() as i32, Color::WHITE);
    }

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

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_hour_marks() {
        let center = point(120., 120., 0.);
        let marks = hour_marks(center, 80.).unwrap();
        assert_eq!(marks.len(), 12);
        assert_eq!(marks[0], point(200., 120., 0.));
        assert_eq!(marks[3], point(120., 200., 0.));
        assert_eq!(marks[6], point(40., 120., 0.));
        for mark in &marks {
            assert!(((*mark - center).magnitude() - 80.).abs() < 1e-9);
        }
    }
}
