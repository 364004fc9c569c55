use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use image::{Rgb, RgbImage};

use crate::color::Color;
use crate::error::Result;

/// Fixed-size pixel buffer, row 0 at the top.
#[derive(Clone, Debug)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && (x as u32) < self.width && y >= 0 && (y as u32) < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Writes are silently dropped outside the canvas.
    pub fn write_pixel(&mut self, x: i32, y: i32, color: Color) {
        match self.offset(x, y) {
            Some(i) => self.pixels[i] = color,
            None => log::trace!(
                "dropping pixel ({}, {}) outside {}x{}",
                x,
                y,
                self.width,
                self.height
            ),
        }
    }

    pub fn pixel_at(&self, x: i32, y: i32) -> Option<Color> {
        self.offset(x, y).map(|i| self.pixels[i])
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Plain-text P3 image: header, then one line of `r g b` triples per row.
    pub fn to_ppm(&self) -> String {
        let mut out = format!("P3\n{} {}\n255\n", self.width, self.height);
        if self.width == 0 {
            return out;
        }
        for row in self.pixels.chunks(self.width as usize) {
            let line = row
                .iter()
                .map(|c| {
                    let [r, g, b] = c.to_rgb8();
                    format!("{} {} {}", r, g, b)
                })
                .collect::<Vec<_>>()
                .join(" ");
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    pub fn write_ppm<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        create_parent_dir(path)?;
        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(self.to_ppm().as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    pub fn to_rgb_image(&self) -> RgbImage {
        let mut image = RgbImage::new(self.width, self.height);
        for (i, color) in self.pixels.iter().enumerate() {
            let x = i as u32 % self.width;
            let y = i as u32 / self.width;
            image.put_pixel(x, y, Rgb::from(color.to_rgb8()));
        }
        image
    }

    /// Encodes the canvas with the `image` crate; the format follows the
    /// file extension.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        create_parent_dir(path)?;
        self.to_rgb_image().save(path)?;
        Ok(())
    }
}

fn create_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_new_canvas_is_black() {
        let c = Canvas::new(10, 20);
        assert_eq!(c.width(), 10);
        assert_eq!(c.height(), 20);
        assert!(c.pixels().iter().all(|p| *p == Color::BLACK));
    }

    #[test]
    fn test_write_pixel() {
        let mut c = Canvas::new(10, 20);
        c.write_pixel(2, 3, Color::RED);
        assert_eq!(c.pixel_at(2, 3), Some(Color::RED));
        c.write_pixel(0, 0, Color::WHITE);
        assert_eq!(c.pixel_at(0, 0), Some(Color::WHITE));
    }

    #[test]
    fn test_out_of_range_writes_are_ignored() {
        let mut c = Canvas::new(4, 4);
        c.write_pixel(-1, 0, Color::RED);
        c.write_pixel(0, 4, Color::RED);
        c.write_pixel(4, 0, Color::RED);
        assert!(c.pixels().iter().all(|p| *p == Color::BLACK));
        assert_eq!(c.pixel_at(4, 0), None);
    }

    #[test]
    fn test_ppm_header_and_body() {
        let mut c = Canvas::new(5, 3);
        c.write_pixel(0, 0, Color::new(1.5, 0., 0.));
        c.write_pixel(2, 1, Color::new(0., 0.5, 0.));
        c.write_pixel(4, 2, Color::new(-0.5, 0., 1.));
        let ppm = c.to_ppm();
        let lines: Vec<_> = ppm.lines().collect();
        assert_eq!(&lines[..3], &["P3", "5 3", "255"]);
        assert_eq!(lines[3], "255 0 0 0 0 0 0 0 0 0 0 0 0 0 0");
        assert_eq!(lines[4], "0 0 0 0 0 0 0 127 0 0 0 0 0 0 0");
        assert_eq!(lines[5], "0 0 0 0 0 0 0 0 0 0 0 0 0 0 255");
        assert_eq!(lines.len(), 6);
        assert!(ppm.ends_with('\n'));
    }

    #[test]
    fn test_to_rgb_image() {
        let mut c = Canvas::new(3, 2);
        c.write_pixel(2, 1, Color::new(0., 1., 0.));
        let image = c.to_rgb_image();
        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(image.get_pixel(2, 1), &Rgb([0, 255, 0]));
        assert_eq!(image.get_pixel(0, 0), &Rgb([0, 0, 0]));
    }
}
