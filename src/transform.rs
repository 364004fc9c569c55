//! Builders for 4x4 affine transforms.
//!
//! Transforms compose right to left: `&(&c * &b) * &a` applies `a` first.
//! Positive angles rotate y toward z about X, z toward x about Y, and x
//! toward y about Z.

use crate::error::Result;
use crate::matrix::Matrix;
use crate::tuple::Tuple;

pub fn translation(x: f64, y: f64, z: f64) -> Matrix {
    let mut m = Matrix::identity(4);
    m[(0, 3)] = x;
    m[(1, 3)] = y;
    m[(2, 3)] = z;
    m
}

pub fn scaling(x: f64, y: f64, z: f64) -> Matrix {
    let mut m = Matrix::identity(4);
    m[(0, 0)] = x;
    m[(1, 1)] = y;
    m[(2, 2)] = z;
    m
}

pub fn rotation_x(theta: f64) -> Matrix {
    let (sin, cos) = theta.sin_cos();
    Matrix::new4([
        [1., 0., 0., 0.],
        [0., cos, -sin, 0.],
        [0., sin, cos, 0.],
        [0., 0., 0., 1.],
    ])
}

pub fn rotation_y(theta: f64) -> Matrix {
    let (sin, cos) = theta.sin_cos();
    Matrix::new4([
        [cos, 0., sin, 0.],
        [0., 1., 0., 0.],
        [-sin, 0., cos, 0.],
        [0., 0., 0., 1.],
    ])
}

pub fn rotation_z(theta: f64) -> Matrix {
    let (sin, cos) = theta.sin_cos();
    Matrix::new4([
        [cos, -sin, 0., 0.],
        [sin, cos, 0., 0.],
        [0., 0., 1., 0.],
        [0., 0., 0., 1.],
    ])
}

/// Each coefficient moves the first axis in proportion to the second,
/// e.g. `xy` moves x in proportion to y.
pub fn shearing(xy: f64, xz: f64, yx: f64, yz: f64, zx: f64, zy: f64) -> Matrix {
    let mut m = Matrix::identity(4);
    m[(0, 1)] = xy;
    m[(0, 2)] = xz;
    m[(1, 0)] = yx;
    m[(1, 2)] = yz;
    m[(2, 0)] = zx;
    m[(2, 1)] = zy;
    m
}

/// Applies `linear` about `center` instead of the origin:
/// `translation(center) * linear * translation(-center)`. Fails unless
/// `linear` is 4x4.
pub fn about_point(linear: &Matrix, center: &Tuple) -> Result<Matrix> {
    let to_origin = translation(-center.x, -center.y, -center.z);
    let back = translation(center.x, center.y, center.z);
    back.multiply(linear)?.multiply(&to_origin)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::Error;
    use crate::tuple::{point, vector};
    use std::f64::consts::PI;

    #[test]
    fn test_translation() {
        let t = translation(5., -3., 2.);
        assert_eq!(&t * point(-3., 4., 5.), point(2., 1., 7.));
        assert_eq!(&t.inverse().unwrap() * point(-3., 4., 5.), point(-8., 7., 3.));
        assert_eq!(&t * vector(-3., 4., 5.), vector(-3., 4., 5.));
    }

    #[test]
    fn test_scaling() {
        let s = scaling(2., 3., 4.);
        assert_eq!(&s * point(-4., 6., 8.), point(-8., 18., 32.));
        assert_eq!(&s * vector(-4., 6., 8.), vector(-8., 18., 32.));
        assert_eq!(&s.inverse().unwrap() * vector(-4., 6., 8.), vector(-2., 2., 2.));
        assert_eq!(scaling(-1., 1., 1.) * point(2., 3., 4.), point(-2., 3., 4.));
    }

    #[test]
    fn test_rotation_x() {
        let p = point(0., 1., 0.);
        let half = 2f64.sqrt() / 2.;
        assert_eq!(rotation_x(PI / 4.) * p, point(0., half, half));
        assert_eq!(rotation_x(PI / 2.) * p, point(0., 0., 1.));
        assert_eq!(
            &rotation_x(PI / 4.).inverse().unwrap() * p,
            point(0., half, -half)
        );
    }

    #[test]
    fn test_rotation_y() {
        let p = point(0., 0., 1.);
        let half = 2f64.sqrt() / 2.;
        assert_eq!(rotation_y(PI / 4.) * p, point(half, 0., half));
        assert_eq!(rotation_y(PI / 2.) * p, point(1., 0., 0.));
    }

    #[test]
    fn test_rotation_z() {
        let p = point(0., 1., 0.);
        let half = 2f64.sqrt() / 2.;
        assert_eq!(rotation_z(PI / 4.) * p, point(-half, half, 0.));
        assert_eq!(rotation_z(PI / 2.) * p, point(-1., 0., 0.));
        assert_eq!(rotation_z(PI / 2.) * point(1., 0., 0.), point(0., 1., 0.));
    }

    #[test]
    fn test_shearing() {
        let p = point(2., 3., 4.);
        assert_eq!(shearing(1., 0., 0., 0., 0., 0.) * p, point(5., 3., 4.));
        assert_eq!(shearing(0., 1., 0., 0., 0., 0.) * p, point(6., 3., 4.));
        assert_eq!(shearing(0., 0., 1., 0., 0., 0.) * p, point(2., 5., 4.));
        assert_eq!(shearing(0., 0., 0., 1., 0., 0.) * p, point(2., 7., 4.));
        assert_eq!(shearing(0., 0., 0., 0., 1., 0.) * p, point(2., 3., 6.));
        assert_eq!(shearing(0., 0., 0., 0., 0., 1.) * p, point(2., 3., 7.));
    }

    #[test]
    fn test_composition_order() {
        let p = point(1., 0., 1.);
        let a = rotation_x(PI / 2.);
        let b = scaling(5., 5., 5.);
        let c = translation(10., 5., 7.);

        let p2 = &a * p;
        assert_eq!(p2, point(1., -1., 0.));
        let p3 = &b * p2;
        assert_eq!(p3, point(5., -5., 0.));
        let p4 = &c * p3;
        assert_eq!(p4, point(15., 0., 7.));

        let chained = &(&c * &b) * &a;
        assert_eq!(&chained * p, point(15., 0., 7.));
    }

    #[test]
    fn test_about_point() {
        let center = point(120., 120., 0.);
        let quarter = about_point(&rotation_z(PI / 2.), &center).unwrap();
        assert_eq!(&quarter * point(200., 120., 0.), point(120., 200., 0.));
        assert_eq!(&quarter * center, center);
    }

    #[test]
    fn test_about_point_requires_4x4() {
        let center = point(1., 2., 3.);
        assert!(matches!(
            about_point(&Matrix::identity(3), &center),
            Err(Error::DimensionMismatch { lhs: (4, 4), rhs: (3, 3) })
        ));
        assert!(matches!(
            about_point(&Matrix::zeros(4, 3), &center),
            Err(Error::DimensionMismatch { lhs: (4, 3), rhs: (4, 4) })
        ));
    }
}
