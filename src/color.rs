use std::ops::{Add, AddAssign, Mul, Sub};

use crate::tuple::approx_eq;

#[derive(Copy, Clone, Debug, Default)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Color {
    pub const BLACK: Color = Color::new(0., 0., 0.);
    pub const WHITE: Color = Color::new(1., 1., 1.);
    pub const RED: Color = Color::new(1., 0., 0.);

    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// Component-wise product, used to filter light through a surface color.
    pub fn hadamard(&self, other: &Self) -> Self {
        Self::new(
            self.red * other.red,
            self.green * other.green,
            self.blue * other.blue,
        )
    }

    /// Clamps each channel to [0, 1] and scales it to 0..=255, truncating.
    pub fn to_rgb8(&self) -> [u8; 3] {
        [
            scale_channel(self.red),
            scale_channel(self.green),
            scale_channel(self.blue),
        ]
    }
}

fn scale_channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    (value.min(1.).max(0.) * 255.) as u8
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.red, other.red)
            && approx_eq(self.green, other.green)
            && approx_eq(self.blue, other.blue)
    }
}

impl Add for Color {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.red + rhs.red, self.green + rhs.green, self.blue + rhs.blue)
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Color {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.red - rhs.red, self.green - rhs.green, self.blue - rhs.blue)
    }
}

impl Mul<f64> for Color {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.red * rhs, self.green * rhs, self.blue * rhs)
    }
}

impl Mul for Color {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.hadamard(&rhs)
    }
}
