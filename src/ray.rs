use crate::error::Result;
use crate::matrix::Matrix;
use crate::tuple::Tuple;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Tuple,
    pub direction: Tuple,
}

impl Ray {
    pub fn new(origin: Tuple, direction: Tuple) -> Self {
        Self { origin, direction }
    }

    pub fn position(&self, t: f64) -> Tuple {
        self.origin + self.direction * t
    }

    /// Applies `m` to both origin and direction. Fails unless `m` is 4x4.
    pub fn transform(&self, m: &Matrix) -> Result<Self> {
        Ok(Self::new(
            m.multiply_tuple(&self.origin)?,
            m.multiply_tuple(&self.direction)?,
        ))
    }
}
