use crate::vector::Vector;
use glam::{DVec2, DVec3, DVec4, Vec2, Vec3, Vec4};

macro_rules! impl_glam_from {
    ($($glam:ident => Vector<$s:ty, $n:literal>),* $(,)?) => {
        $(
            impl From<$glam> for Vector<$s, $n> {
                #[inline]
                fn from(v: $glam) -> Self {
                    Self::from_array(v.to_array())
                }
            }

            impl From<Vector<$s, $n>> for $glam {
                #[inline]
                fn from(v: Vector<$s, $n>) -> Self {
                    $glam::from_array(v.to_array())
                }
            }
        )*
    };
}

impl_glam_from!(
    Vec2 => Vector<f32, 2>,
    Vec3 => Vector<f32, 3>,
    Vec4 => Vector<f32, 4>,
    DVec2 => Vector<f64, 2>,
    DVec3 => Vector<f64, 3>,
    DVec4 => Vector<f64, 4>,
);
