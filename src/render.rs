use std::time::Instant;

use rayon::prelude::*;

use crate::canvas::Canvas;
use crate::color::Color;
use crate::ray::Ray;
use crate::tuple::{point, Tuple};

/// An eye looking at a square wall parallel to the xy plane. Each canvas
/// pixel maps to one point on the wall; pixel rows grow downward while world
/// y grows upward.
#[derive(Copy, Clone, Debug)]
pub struct Wall {
    pub origin: Tuple,
    pub wall_z: f64,
    pub wall_size: f64,
    pub pixels: u32,
}

impl Wall {
    pub fn new(origin: Tuple, wall_z: f64, wall_size: f64, pixels: u32) -> Self {
        Self {
            origin,
            wall_z,
            wall_size,
            pixels,
        }
    }

    pub fn pixel_size(&self) -> f64 {
        self.wall_size / self.pixels as f64
    }

    pub fn ray_for_pixel(&self, x: u32, y: u32) -> Ray {
        let half = self.wall_size / 2.;
        let world_x = -half + self.pixel_size() * x as f64;
        let world_y = half - self.pixel_size() * y as f64;
        let target = point(world_x, world_y, self.wall_z);
        Ray::new(self.origin, (target - self.origin).normalize())
    }

    /// Casts one ray per pixel in parallel. Pixels where `shade` returns
    /// `None` stay black.
    pub fn render<F>(&self, shade: F) -> Canvas
    where
        F: Fn(&Ray) -> Option<Color> + Sync,
    {
        let start = Instant::now();
        let mut pixels = Vec::new();
        for y in 0..self.pixels {
            for x in 0..self.pixels {
                pixels.push((x, y));
            }
        }

        let shaded: Vec<_> = pixels
            .into_par_iter()
            .filter_map(|(x, y)| shade(&self.ray_for_pixel(x, y)).map(|color| (x, y, color)))
            .collect();

        let mut canvas = Canvas::new(self.pixels, self.pixels);
        let lit = shaded.len();
        for (x, y, color) in shaded {
            canvas.write_pixel(x as i32, y as i32, color);
        }
        log::debug!(
            "rendered {}x{} wall, {} pixels shaded in {:?}",
            self.pixels,
            self.pixels,
            lit,
            start.elapsed()
        );
        canvas
    }
}
