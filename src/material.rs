use crate::color::Color;
use crate::tuple::approx_eq;

/// Phong reflectance parameters of a surface.
#[derive(Copy, Clone, Debug)]
pub struct Material {
    pub color: Color,
    pub ambient: f64,
    pub diffuse: f64,
    pub specular: f64,
    pub shininess: f64,
}

impl Material {
    pub fn new(color: Color, ambient: f64, diffuse: f64, specular: f64, shininess: f64) -> Self {
        Self {
            color,
            ambient,
            diffuse,
            specular,
            shininess,
        }
    }

    pub fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new(Color::WHITE, 0.1, 0.9, 0.9, 200.)
    }
}

impl PartialEq for Material {
    fn eq(&self, other: &Self) -> bool {
        self.color == other.color
            && approx_eq(self.ambient, other.ambient)
            && approx_eq(self.diffuse, other.diffuse)
            && approx_eq(self.specular, other.specular)
            && approx_eq(self.shininess, other.shininess)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_material() {
        let m = Material::default();
        assert_eq!(m.color, Color::new(1., 1., 1.));
        assert_eq!(m.ambient, 0.1);
        assert_eq!(m.diffuse, 0.9);
        assert_eq!(m.specular, 0.9);
        assert_eq!(m.shininess, 200.);
    }

    #[test]
    fn test_with_color() {
        let m = Material::default().with_color(Color::new(1., 0.2, 1.));
        assert_eq!(m.color, Color::new(1., 0.2, 1.));
        assert_ne!(m, Material::default());
        assert_eq!(m.shininess, 200.);
    }
}
