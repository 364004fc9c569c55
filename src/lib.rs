pub mod canvas;
pub mod color;
pub mod error;
pub mod light;
pub mod material;
pub mod matrix;
pub mod ray;
pub mod render;
pub mod sphere;
pub mod transform;
pub mod tuple;
pub mod world;

pub use canvas::Canvas;
pub use color::Color;
pub use error::{Error, Result};
pub use light::{lighting, PointLight};
pub use material::Material;
pub use matrix::Matrix;
pub use ray::Ray;
pub use sphere::{hit, IdAllocator, Intersection, Sphere, SphereId};
pub use tuple::{point, vector, Tuple};
pub use world::World;
