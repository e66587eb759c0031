use crate::Error;

use core::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign},
};

#[cfg(feature = "std")]
fn sqrt(value: f32) -> f32 {
    value.sqrt()
}

// `core` has no float square root. `libm::sqrtf` is correctly rounded.
#[cfg(not(feature = "std"))]
fn sqrt(value: f32) -> f32 {
    libm::sqrtf(value)
}

/// A point or direction in 3D space.
///
/// Components are plain `f32`s. NaN and infinities are representable and propagate through the
/// arithmetic unchanged.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Returns the Euclidean length of the `Vector3`.
    pub fn length(self) -> f32 {
        sqrt(self.length_squared())
    }

    /// Returns the squared length, skipping the square root.
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Returns a unit-length copy of the `Vector3`.
    ///
    /// A vector of zero length is returned unchanged, so this never yields NaN for finite input.
    pub fn normalize(self) -> Self {
        let len = self.length();

        if len > 0.0 {
            return self / len;
        }

        self
    }

    /// Scalar dot product.
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product. `a.cross(b) == -b.cross(a)` holds exactly.
    pub fn cross(self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Euclidean distance between two points.
    pub fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }

    /// In-place addition, returning `self` for chaining.
    pub fn add_mut(&mut self, other: Self) -> &mut Self {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
        self
    }

    /// In-place subtraction, returning `self` for chaining.
    pub fn sub_mut(&mut self, other: Self) -> &mut Self {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
        self
    }

    /// In-place scale, returning `self` for chaining.
    pub fn scale_mut(&mut self, scalar: f32) -> &mut Self {
        self.x *= scalar;
        self.y *= scalar;
        self.z *= scalar;
        self
    }

    /// In-place division, returning `self` for chaining.
    /// Division by zero follows IEEE 754 and yields infinite or NaN components.
    pub fn div_mut(&mut self, scalar: f32) -> &mut Self {
        self.x /= scalar;
        self.y /= scalar;
        self.z /= scalar;
        self
    }

    /// Returns the component at `index`, or an error if `index` is not 0, 1 or 2.
    pub fn get(&self, index: usize) -> Result<f32, Error> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(Error::IndexOutOfBounds(index)),
        }
    }

    /// Returns a mutable reference to the component at `index`, or an error if `index` is not
    /// 0, 1 or 2.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut f32, Error> {
        match index {
            0 => Ok(&mut self.x),
            1 => Ok(&mut self.y),
            2 => Ok(&mut self.z),
            _ => Err(Error::IndexOutOfBounds(index)),
        }
    }
}

impl Add for Vector3 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Mul<f32> for Vector3 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

impl Mul<Vector3> for f32 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs * self
    }
}

impl Div<f32> for Vector3 {
    type Output = Self;

    fn div(self, rhs: f32) -> Self {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}

impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, other: Self) {
        self.add_mut(other);
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, other: Self) {
        self.sub_mut(other);
    }
}

impl MulAssign<f32> for Vector3 {
    fn mul_assign(&mut self, rhs: f32) {
        self.scale_mut(rhs);
    }
}

impl DivAssign<f32> for Vector3 {
    fn div_assign(&mut self, rhs: f32) {
        self.div_mut(rhs);
    }
}

// Without `bounds-checked`, every index past 1 resolves to `z`.
impl Index<usize> for Vector3 {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            #[cfg(feature = "bounds-checked")]
            2 => &self.z,
            #[cfg(feature = "bounds-checked")]
            _ => panic!("{}", Error::IndexOutOfBounds(index)),
            #[cfg(not(feature = "bounds-checked"))]
            _ => &self.z,
        }
    }
}

impl IndexMut<usize> for Vector3 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            #[cfg(feature = "bounds-checked")]
            2 => &mut self.z,
            #[cfg(feature = "bounds-checked")]
            _ => panic!("{}", Error::IndexOutOfBounds(index)),
            #[cfg(not(feature = "bounds-checked"))]
            _ => &mut self.z,
        }
    }
}

impl Sum for Vector3 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from(v: [f32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<(f32, f32, f32)> for Vector3 {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f32; 3] {
    fn from(v: Vector3) -> Self {
        [v.x, v.y, v.z]
    }
}
