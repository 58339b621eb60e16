mod error;
mod glam_ext;
mod scalar;
mod vector;
mod vector_serde;

pub use error::VectorError;
pub use scalar::{Real, Scalar};
pub use vector::{Vector, Vector2d, Vector3d, Vector4d};
