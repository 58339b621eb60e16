use crate::{
    error::VectorError,
    scalar::{Real, Scalar},
};
use core::{
    convert::TryFrom,
    fmt,
    ops::{Add, Index, Mul, Neg, Sub},
    slice,
};

/// A fixed size vector of `N` scalar components.
///
/// Every operation takes its operands by value or shared reference and
/// returns a new vector; there is no API for mutating a vector in place.
///
/// The component count is part of the type, so vectors of different sizes
/// cannot be combined:
///
/// ```compile_fail
/// use linear_algebra::{Vector, Vector3d};
/// let a = Vector3d::new(1.0, 2.0, 3.0);
/// let b = Vector::<f64, 2>::new(1.0, 2.0);
/// let _ = a + b;
/// ```
///
/// ```compile_fail
/// use linear_algebra::{Vector, Vector3d};
/// let a = Vector3d::new(1.0, 2.0, 3.0);
/// let b = Vector::<f64, 2>::new(1.0, 2.0);
/// let _ = a.dot(&b);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Vector<S, const N: usize>([S; N]);

pub type Vector2d = Vector<f64, 2>;
pub type Vector3d = Vector<f64, 3>;
pub type Vector4d = Vector<f64, 4>;

/// Builds a vector from its components in order.
///
/// ```
/// use linear_algebra::{vector, Vector3d};
/// let v: Vector3d = vector![1.0, 2.0, 3.0];
/// assert_eq!(Vector3d::new(1.0, 2.0, 3.0), v);
/// ```
///
/// The number of components must match the dimension of the target type:
///
/// ```compile_fail
/// use linear_algebra::{vector, Vector3d};
/// let v: Vector3d = vector![1.0, 2.0];
/// ```
#[macro_export]
macro_rules! vector {
    ($($x:expr),* $(,)?) => {
        $crate::Vector::from_array([$($x),*])
    };
}

impl<S, const N: usize> Vector<S, N> {
    #[inline]
    pub const fn from_array(components: [S; N]) -> Self {
        Self(components)
    }

    #[inline]
    pub const fn as_array(&self) -> &[S; N] {
        &self.0
    }

    #[inline]
    pub const fn dim(&self) -> usize {
        N
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, S> {
        self.0.iter()
    }

    /// Builds a vector from components of any type convertible to `S`.
    ///
    /// ```
    /// use linear_algebra::Vector3d;
    /// assert_eq!(Vector3d::new(1.0, 0.0, 0.0), Vector3d::from_converted([1, 0, 0]));
    /// ```
    #[inline]
    pub fn from_converted<T: Into<S>>(components: [T; N]) -> Self {
        Self(components.map(Into::into))
    }
}

impl<S> Vector<S, 2> {
    #[inline]
    pub const fn new(x: S, y: S) -> Self {
        Self([x, y])
    }
}

/// The positional constructors take components of exactly the scalar type;
/// use [`Vector::from_converted`] to build from other numeric types.
impl<S> Vector<S, 3> {
    /// ```compile_fail
    /// use linear_algebra::Vector3d;
    /// let v = Vector3d::new(1.0, 2.0);
    /// ```
    #[inline]
    pub const fn new(x: S, y: S, z: S) -> Self {
        Self([x, y, z])
    }
}

impl<S> Vector<S, 4> {
    #[inline]
    pub const fn new(x: S, y: S, z: S, w: S) -> Self {
        Self([x, y, z, w])
    }
}

impl<S: Scalar, const N: usize> Vector<S, N> {
    #[inline]
    pub fn zero() -> Self {
        Self([S::ZERO; N])
    }

    #[inline]
    pub fn splat(s: S) -> Self {
        Self([s; N])
    }

    #[inline]
    pub fn to_array(&self) -> [S; N] {
        self.0
    }

    #[inline]
    pub fn dot(&self, rhs: &Self) -> S {
        self.0
            .iter()
            .zip(rhs.0.iter())
            .fold(S::ZERO, |dot, (&lhs, &rhs)| dot + lhs * rhs)
    }

    #[inline]
    pub fn length_squared(&self) -> S {
        self.dot(self)
    }

    #[inline]
    fn zip_with(self, rhs: Self, f: impl Fn(S, S) -> S) -> Self {
        let mut tmp = self;
        for n in 0..N {
            tmp.0[n] = f(self.0[n], rhs.0[n]);
        }
        tmp
    }
}

/// Square root based operations, only available for floating point scalars.
///
/// ```compile_fail
/// use linear_algebra::Vector;
/// let v = Vector::<i32, 3>::new(3, 4, 0);
/// let _ = v.length();
/// ```
impl<S: Real, const N: usize> Vector<S, N> {
    // Divides out the largest component magnitude so squaring cannot
    // overflow or underflow. `None` for zero or non-finite vectors.
    fn unit_scaled(&self) -> Option<(S, Self)> {
        let max = self
            .0
            .iter()
            .fold(S::ZERO, |max, &c| if c.abs() > max { c.abs() } else { max });
        if max == S::ZERO || !max.is_finite() {
            return None;
        }
        let mut tmp = *self;
        for n in 0..N {
            tmp.0[n] = self.0[n] / max;
        }
        Some((max, tmp))
    }

    pub fn length(&self) -> S {
        match self.unit_scaled() {
            Some((max, scaled)) => max * scaled.length_squared().sqrt(),
            None => self.length_squared().sqrt(),
        }
    }

    /// Returns `None` for a zero length or non-finite vector.
    pub fn normalize(&self) -> Option<Self> {
        let (_, scaled) = self.unit_scaled()?;
        let length = scaled.length_squared().sqrt();
        if !length.is_finite() {
            return None;
        }
        Some(scaled * (S::ONE / length))
    }

    #[inline]
    pub fn distance(&self, rhs: &Self) -> S {
        (*self - *rhs).length()
    }

    /// Angle between the two vectors in radians, in the range `[0, pi]`.
    /// Returns `None` if either vector has zero length or is not finite.
    pub fn angle_between(&self, rhs: &Self) -> Option<S> {
        let (_, a) = self.unit_scaled()?;
        let (_, b) = rhs.unit_scaled()?;
        let cos = a.dot(&b) / (a.length_squared().sqrt() * b.length_squared().sqrt());
        if !cos.is_finite() {
            return None;
        }
        // rounding can push the cosine slightly outside of [-1, 1]
        Some(cos.clamp(-S::ONE, S::ONE).acos())
    }
}

impl<S: Scalar> Vector<S, 3> {
    /// The cross product, which only exists for 3 dimensional vectors.
    ///
    /// ```
    /// use linear_algebra::Vector3d;
    /// let z = Vector3d::new(1.0, 0.0, 0.0).cross(&Vector3d::new(0.0, 1.0, 0.0));
    /// assert_eq!(Vector3d::new(0.0, 0.0, 1.0), z);
    /// ```
    ///
    /// ```compile_fail
    /// use linear_algebra::Vector;
    /// let a = Vector::<f64, 2>::new(1.0, 0.0);
    /// let b = Vector::<f64, 2>::new(0.0, 1.0);
    /// let _ = a.cross(&b);
    /// ```
    #[inline]
    pub fn cross(&self, rhs: &Self) -> Self {
        let [ax, ay, az] = self.0;
        let [bx, by, bz] = rhs.0;
        Self([ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx])
    }
}

impl<S: Scalar, const N: usize> Default for Vector<S, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<S, const N: usize> Index<usize> for Vector<S, N> {
    type Output = S;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<S, const N: usize> From<[S; N]> for Vector<S, N> {
    #[inline]
    fn from(components: [S; N]) -> Self {
        Self(components)
    }
}

impl<S, const N: usize> From<Vector<S, N>> for [S; N] {
    #[inline]
    fn from(v: Vector<S, N>) -> Self {
        v.0
    }
}

impl<S: Copy, const N: usize> TryFrom<&[S]> for Vector<S, N> {
    type Error = VectorError;
    fn try_from(components: &[S]) -> Result<Self, Self::Error> {
        <[S; N]>::try_from(components)
            .map(Self)
            .map_err(|_| VectorError::DimensionMismatch {
                expected: N,
                actual: components.len(),
            })
    }
}

impl<S, const N: usize> TryFrom<Vec<S>> for Vector<S, N> {
    type Error = VectorError;
    fn try_from(components: Vec<S>) -> Result<Self, Self::Error> {
        let actual = components.len();
        <[S; N]>::try_from(components)
            .map(Self)
            .map_err(|_| VectorError::DimensionMismatch {
                expected: N,
                actual,
            })
    }
}

impl<S: Scalar, const N: usize> Add<Vector<S, N>> for Vector<S, N> {
    type Output = Vector<S, N>;
    #[inline]
    fn add(self, rhs: Vector<S, N>) -> Self::Output {
        self.zip_with(rhs, |lhs, rhs| lhs + rhs)
    }
}

impl<S: Scalar, const N: usize> Sub<Vector<S, N>> for Vector<S, N> {
    type Output = Vector<S, N>;
    #[inline]
    fn sub(self, rhs: Vector<S, N>) -> Self::Output {
        self.zip_with(rhs, |lhs, rhs| lhs - rhs)
    }
}

impl<S: Scalar, const N: usize> Mul<S> for Vector<S, N> {
    type Output = Vector<S, N>;
    #[inline]
    fn mul(self, rhs: S) -> Self::Output {
        let mut tmp = self;
        for n in 0..N {
            tmp.0[n] = rhs * self.0[n];
        }
        tmp
    }
}

impl<S: Scalar + Neg<Output = S>, const N: usize> Neg for Vector<S, N> {
    type Output = Vector<S, N>;
    #[inline]
    fn neg(self) -> Self::Output {
        let mut tmp = self;
        for n in 0..N {
            tmp.0[n] = -self.0[n];
        }
        tmp
    }
}

// scalar on the left, `2.0 * v`
macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl<const N: usize> Mul<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;
                #[inline]
                fn mul(self, rhs: Vector<$t, N>) -> Self::Output {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Renders as `[ c0, c1, ..., cN-1 ]`.
///
/// Formatting options are applied to each component, so `{:.6}` gives six
/// decimal places per component.
///
/// ```
/// use linear_algebra::Vector3d;
/// let v = Vector3d::new(1.0, 2.0, 3.0);
/// assert_eq!("[ 1, 2, 3 ]", v.to_string());
/// assert_eq!("[ 1.000000, 2.000000, 3.000000 ]", format!("{:.6}", v));
/// ```
impl<S: fmt::Display, const N: usize> fmt::Display for Vector<S, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if N == 0 {
            return f.write_str("[ ]");
        }
        f.write_str("[ ")?;
        for (i, component) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(component, f)?;
        }
        f.write_str(" ]")
    }
}
