use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{Error, Result};
use crate::material::Material;
use crate::matrix::Matrix;
use crate::ray::Ray;
use crate::tuple::{point, Tuple};

/// Unique only among spheres drawn from the same `IdAllocator`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SphereId(pub u64);

/// Hands out sphere ids in increasing order, starting at 0. Safe to share
/// between threads.
#[derive(Debug, Default)]
pub struct IdAllocator {
    next: AtomicU64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> SphereId {
        SphereId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

/// Unit sphere at the object-space origin.
#[derive(Clone, Debug)]
pub struct Sphere {
    id: SphereId,
    transform: Matrix,
    inverse: Matrix,
    pub material: Material,
}

impl Sphere {
    pub fn new(ids: &IdAllocator) -> Self {
        Self {
            id: ids.next_id(),
            transform: Matrix::identity(4),
            inverse: Matrix::identity(4),
            material: Material::default(),
        }
    }

    pub fn with_transform(mut self, transform: Matrix) -> Result<Self> {
        self.set_transform(transform)?;
        Ok(self)
    }

    pub fn with_material(self, material: Material) -> Self {
        Self { material, ..self }
    }

    pub fn id(&self) -> SphereId {
        self.id
    }

    pub fn origin(&self) -> Tuple {
        point(0., 0., 0.)
    }

    pub fn radius(&self) -> f64 {
        1.
    }

    pub fn transform(&self) -> &Matrix {
        &self.transform
    }

    pub fn inverse_transform(&self) -> &Matrix {
        &self.inverse
    }

    /// Replaces the object-to-world transform. Rejects anything that is not
    /// an invertible 4x4 matrix and leaves the sphere untouched in that case.
    pub fn set_transform(&mut self, transform: Matrix) -> Result<()> {
        if transform.shape() != (4, 4) {
            return Err(Error::Shape {
                expected: (4, 4),
                actual: transform.shape(),
            });
        }
        self.inverse = transform.inverse()?;
        self.transform = transform;
        Ok(())
    }

    /// Both crossings of `ray` with the sphere, nearest first. A tangent ray
    /// gives the same `t` twice.
    pub fn intersect(&self, ray: &Ray) -> Vec<Intersection<'_>> {
        // the cached inverse is always 4x4
        let ray = Ray::new(&self.inverse * ray.origin, &self.inverse * ray.direction);
        let sphere_to_ray = ray.origin - self.origin();

        let a = ray.direction.dot(&ray.direction);
        let b = 2. * ray.direction.dot(&sphere_to_ray);
        let c = sphere_to_ray.dot(&sphere_to_ray) - 1.;
        if let Some((t1, t2)) = solve_quadratic(a, b, c) {
            vec![Intersection::new(t1, self), Intersection::new(t2, self)]
        } else {
            vec![]
        }
    }

    /// World-space unit normal at `world_point`, assumed to lie on the surface.
    pub fn normal_at(&self, world_point: &Tuple) -> Tuple {
        let object_point = &self.inverse * *world_point;
        let object_normal = object_point - self.origin();
        let mut world_normal = &self.inverse.transpose() * object_normal;
        world_normal.w = 0.;
        world_normal.normalize()
    }
}

impl PartialEq for Sphere {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.transform == other.transform && self.material == other.material
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Intersection<'a> {
    pub t: f64,
    pub object: &'a Sphere,
}

impl<'a> Intersection<'a> {
    pub fn new(t: f64, object: &'a Sphere) -> Self {
        Self { t, object }
    }
}

/// The intersection with the smallest non-negative `t`, if any. The first
/// one wins on ties.
pub fn hit<'a>(intersections: &[Intersection<'a>]) -> Option<Intersection<'a>> {
    intersections
        .iter()
        .filter(|i| i.t >= 0.)
        .fold(None, |acc: Option<Intersection<'a>>, i| match acc {
            Some(min) if min.t <= i.t => Some(min),
            _ => Some(*i),
        })
}

/// Real roots of `a*t^2 + b*t + c`, smaller first. `None` when the roots are
/// complex or the equation is degenerate (`a == 0`).
fn solve_quadratic(a: f64, b: f64, c: f64) -> Option<(f64, f64)> {
    if a == 0. {
        return None;
    }
    let discriminant = b * b - 4. * a * c;
    if discriminant < 0. || discriminant.is_nan() {
        return None;
    }
    let disc_sqrt = discriminant.sqrt();
    let root1 = (-b - disc_sqrt) / (2. * a);
    let root2 = (-b + disc_sqrt) / (2. * a);
    Some((root1.min(root2), root1.max(root2)))
}
