use crate::color::Color;
use crate::material::Material;
use crate::tuple::Tuple;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointLight {
    pub position: Tuple,
    pub intensity: Color,
}

impl PointLight {
    pub fn new(position: Tuple, intensity: Color) -> Self {
        Self { position, intensity }
    }
}

/// Phong shading of `point` as seen along `eye`, with surface normal
/// `normal`. Both vectors are expected to be normalized. The result is not
/// clamped.
pub fn lighting(
    material: &Material,
    light: &PointLight,
    point: &Tuple,
    eye: &Tuple,
    normal: &Tuple,
) -> Color {
    let effective_color = material.color * light.intensity;
    let light_v = (light.position - *point).normalize();
    let ambient = effective_color * material.ambient;

    let light_dot_normal = light_v.dot(normal);
    if light_dot_normal < 0. {
        // light is on the other side of the surface
        return ambient;
    }

    let diffuse = effective_color * material.diffuse * light_dot_normal;
    let reflect_v = (-light_v).reflect(normal);
    let reflect_dot_eye = reflect_v.dot(eye);
    let specular = if reflect_dot_eye <= 0. {
        Color::BLACK
    } else {
        light.intensity * material.specular * reflect_dot_eye.powf(material.shininess)
    };

    ambient + diffuse + specular
}
