use std::collections::BTreeMap;

use crate::color::Color;
use crate::light::{lighting, PointLight};
use crate::ray::Ray;
use crate::sphere::{hit, IdAllocator, Intersection, Sphere};

/// Named spheres lit by at most one point light.
#[derive(Debug, Default)]
pub struct World {
    objects: BTreeMap<String, Sphere>,
    light: Option<PointLight>,
    ids: IdAllocator,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// A fresh sphere with an id from this world's allocator. It is not
    /// added to the world until passed to [`World::insert`].
    pub fn new_sphere(&self) -> Sphere {
        Sphere::new(&self.ids)
    }

    /// Returns the sphere previously stored under `name`, if any.
    pub fn insert<S: Into<String>>(&mut self, name: S, sphere: Sphere) -> Option<Sphere> {
        self.objects.insert(name.into(), sphere)
    }

    pub fn get(&self, name: &str) -> Option<&Sphere> {
        self.objects.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Sphere> {
        self.objects.get_mut(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Sphere> {
        self.objects.remove(name)
    }

    pub fn objects(&self) -> impl Iterator<Item = (&str, &Sphere)> {
        self.objects.iter().map(|(name, sphere)| (name.as_str(), sphere))
    }

    pub fn light(&self) -> Option<&PointLight> {
        self.light.as_ref()
    }

    pub fn set_light(&mut self, light: Option<PointLight>) {
        self.light = light;
    }

    /// Every object's intersections with `ray`, sorted by `t`.
    pub fn intersect(&self, ray: &Ray) -> Vec<Intersection<'_>> {
        let mut intersections: Vec<_> = self
            .objects
            .values()
            .flat_map(|sphere| sphere.intersect(ray))
            .collect();
        intersections.sort_by(|a, b| a.t.partial_cmp(&b.t).unwrap_or(std::cmp::Ordering::Equal));
        intersections
    }

    /// Phong color of the first surface `ray` hits. Black on a miss or when
    /// the world has no light.
    pub fn color_at(&self, ray: &Ray) -> Color {
        let light = match &self.light {
            Some(light) => light,
            None => return Color::BLACK,
        };
        hit(&self.intersect(ray))
            .map(|i| {
                let p = ray.position(i.t);
                let normal = i.object.normal_at(&p);
                lighting(&i.object.material, light, &p, &-ray.direction, &normal)
            })
            .unwrap_or(Color::BLACK)
    }
}
