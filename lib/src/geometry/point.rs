//! 3D point type.

use crate::CoordF;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// A 3D point with floating-point coordinates (in model units).
#[derive(Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point3F {
    pub x: CoordF,
    pub y: CoordF,
    pub z: CoordF,
}

impl Point3F {
    /// Create a new 3D point.
    #[inline]
    pub const fn new(x: CoordF, y: CoordF, z: CoordF) -> Self {
        Self { x, y, z }
    }

    /// The origin.
    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Check if approximately equal.
    #[inline]
    pub fn approx_eq(&self, other: &Point3F, epsilon: CoordF) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
    }
}

impl fmt::Debug for Point3F {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point3F({:.6}, {:.6}, {:.6})", self.x, self.y, self.z)
    }
}

impl fmt::Display for Point3F {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6}, {:.6})", self.x, self.y, self.z)
    }
}

impl Add for Point3F {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Point3F {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl From<(CoordF, CoordF, CoordF)> for Point3F {
    #[inline]
    fn from((x, y, z): (CoordF, CoordF, CoordF)) -> Self {
        Self { x, y, z }
    }
}

impl From<Point3F> for [CoordF; 3] {
    #[inline]
    fn from(p: Point3F) -> Self {
        [p.x, p.y, p.z]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_arithmetic() {
        let a = Point3F::new(1.0, 2.0, 3.0);
        let b = Point3F::new(0.5, 0.5, 0.5);
        assert!((a + b).approx_eq(&Point3F::new(1.5, 2.5, 3.5), 1e-12));
        assert!((a - b).approx_eq(&Point3F::new(0.5, 1.5, 2.5), 1e-12));
    }

    #[test]
    fn test_point_from_tuple() {
        let p: Point3F = (1.0, -2.0, 0.25).into();
        assert_eq!(<[CoordF; 3]>::from(p), [1.0, -2.0, 0.25]);
        assert_eq!(Point3F::zero(), Point3F::default());
    }
}
