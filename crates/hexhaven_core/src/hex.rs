//! # Hexagonal Coordinates
//!
//! A dual cubic/offset addressing scheme for a hexagonal grid, based on the
//! Red Blob Games hexagon reference. Cubic coordinates `(q, r, s)` always sum
//! to zero; the derived offset coordinates `(x, y)` use the odd-q vertical
//! layout and are what the [`crate::grid::EntityGrid`] indexes by.

use crate::error::CoreError;
use std::ops::{Add, Div, Mul, Sub};

/// One of the six neighbor directions of a hexagon.
///
/// Directions are an explicit enum rather than a raw integer so that an
/// out-of-range direction cannot be expressed at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HexDirection {
    /// Towards +q.
    East,
    /// Towards +q, -r.
    NorthEast,
    /// Towards -r.
    NorthWest,
    /// Towards -q.
    West,
    /// Towards -q, +r.
    SouthWest,
    /// Towards +r.
    SouthEast,
}

impl HexDirection {
    /// All six directions, in counter-clockwise order starting east.
    pub const ALL: [Self; 6] = [
        Self::East,
        Self::NorthEast,
        Self::NorthWest,
        Self::West,
        Self::SouthWest,
        Self::SouthEast,
    ];

    /// The unit vector pointing in this direction.
    #[must_use]
    pub const fn unit(self) -> HexVector {
        match self {
            Self::East => HexVector::unit_unchecked(1, 0, -1),
            Self::NorthEast => HexVector::unit_unchecked(1, -1, 0),
            Self::NorthWest => HexVector::unit_unchecked(0, -1, 1),
            Self::West => HexVector::unit_unchecked(-1, 0, 1),
            Self::SouthWest => HexVector::unit_unchecked(-1, 1, 0),
            Self::SouthEast => HexVector::unit_unchecked(0, 1, -1),
        }
    }
}

/// A coordinate in a two-dimensional hexagonal grid, unbound to any
/// particular map.
///
/// Stores cubic coordinates `(q, r, s)` with the invariant `q + r + s == 0`,
/// plus the derived offset pair `(x, y)`:
///
/// ```text
/// x = q
/// y = r + (q - (q & 1)) / 2
/// ```
///
/// Equality and hashing follow `(q, r, s)`; since `(x, y)` is fully derived,
/// the derived impls are equivalent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HexVector {
    q: i32,
    r: i32,
    s: i32,
    x: i32,
    y: i32,
}

impl HexVector {
    /// The origin hex.
    pub const ZERO: Self = Self::unit_unchecked(0, 0, 0);

    /// Builds a vector from cubic components, deriving the offset pair.
    /// The caller must guarantee `q + r + s == 0`.
    const fn unit_unchecked(q: i32, r: i32, s: i32) -> Self {
        Self {
            q,
            r,
            s,
            x: q,
            y: r + (q - (q & 1)) / 2,
        }
    }

    /// Creates a hex from cubic coordinates.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidCubic`] unless `q + r + s == 0`.
    pub const fn from_cubic(q: i32, r: i32, s: i32) -> Result<Self, CoreError> {
        if q + r + s != 0 {
            return Err(CoreError::InvalidCubic { q, r, s });
        }
        Ok(Self::unit_unchecked(q, r, s))
    }

    /// Creates a hex from offset (odd-q vertical) coordinates.
    ///
    /// Always succeeds: the cubic components are derived and sum to zero by
    /// construction.
    #[must_use]
    pub const fn from_offset(x: i32, y: i32) -> Self {
        let q = x;
        let r = y - (x - (x & 1)) / 2;
        let s = -q - r;
        Self { q, r, s, x, y }
    }

    /// First cubic component.
    #[inline]
    #[must_use]
    pub const fn q(self) -> i32 {
        self.q
    }

    /// Second cubic component.
    #[inline]
    #[must_use]
    pub const fn r(self) -> i32 {
        self.r
    }

    /// Third cubic component.
    #[inline]
    #[must_use]
    pub const fn s(self) -> i32 {
        self.s
    }

    /// Offset column.
    #[inline]
    #[must_use]
    pub const fn x(self) -> i32 {
        self.x
    }

    /// Offset row.
    #[inline]
    #[must_use]
    pub const fn y(self) -> i32 {
        self.y
    }

    /// The hex one step away in `direction`.
    #[inline]
    #[must_use]
    pub fn neighbor(self, direction: HexDirection) -> Self {
        self + direction.unit()
    }

    /// Rotates 60 degrees counter-clockwise around the origin.
    #[must_use]
    pub const fn rotate_left(self) -> Self {
        Self::unit_unchecked(-self.s, -self.q, -self.r)
    }

    /// Rotates 60 degrees clockwise around the origin.
    #[must_use]
    pub const fn rotate_right(self) -> Self {
        Self::unit_unchecked(-self.r, -self.s, -self.q)
    }

    /// Distance from the origin in hex steps.
    #[must_use]
    pub const fn length(self) -> i32 {
        (self.q.abs() + self.r.abs() + self.s.abs()) / 2
    }

    /// Distance to `other` in hex steps.
    #[must_use]
    pub fn distance(self, other: Self) -> i32 {
        (self - other).length()
    }
}

impl std::fmt::Display for HexVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "HexVector (Cubic: {}, {}, {}) (Offset: {}, {})",
            self.q, self.r, self.s, self.x, self.y
        )
    }
}

impl Add for HexVector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::unit_unchecked(self.q + rhs.q, self.r + rhs.r, self.s + rhs.s)
    }
}

impl Sub for HexVector {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::unit_unchecked(self.q - rhs.q, self.r - rhs.r, self.s - rhs.s)
    }
}

impl Mul<i32> for HexVector {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self {
        Self::unit_unchecked(self.q * rhs, self.r * rhs, self.s * rhs)
    }
}

/// Componentwise truncating division.
///
/// Division by a non-divisor truncates each component independently, which
/// can land off the zero-sum plane. That case is treated as a caller bug.
///
/// # Panics
///
/// Panics when truncation breaks the cubic invariant, e.g. `(1, 1, -2) / 2`.
impl Div<i32> for HexVector {
    type Output = Self;

    fn div(self, rhs: i32) -> Self {
        let (q, r, s) = (self.q / rhs, self.r / rhs, self.s / rhs);
        assert!(
            q + r + s == 0,
            "truncating division produced an invalid hex: ({q}, {r}, {s})"
        );
        Self::unit_unchecked(q, r, s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cubic_constructor_rejects_nonzero_sum() {
        assert!(HexVector::from_cubic(1, -1, 0).is_ok());
        assert_eq!(
            HexVector::from_cubic(1, 1, 1),
            Err(CoreError::InvalidCubic { q: 1, r: 1, s: 1 })
        );
    }

    #[test]
    fn test_offset_derivation_follows_odd_q_layout() {
        let hex = HexVector::from_cubic(1, -1, 0).unwrap();
        assert_eq!(hex.x(), 1);
        // y = r + (q - (q & 1)) / 2 = -1 + (1 - 1) / 2 = -1
        assert_eq!(hex.y(), -1);

        let hex = HexVector::from_cubic(3, -2, -1).unwrap();
        assert_eq!(hex.x(), 3);
        assert_eq!(hex.y(), -1);
    }

    #[test]
    fn test_cubic_offset_round_trip() {
        for q in -8..=8 {
            for r in -8..=8 {
                let hex = HexVector::from_cubic(q, r, -q - r).unwrap();
                let back = HexVector::from_offset(hex.x(), hex.y());
                assert_eq!(hex, back, "round trip failed for ({q}, {r})");
            }
        }
    }

    #[test]
    fn test_offset_constructor_always_valid() {
        for x in -5..=5 {
            for y in -5..=5 {
                let hex = HexVector::from_offset(x, y);
                assert_eq!(hex.q() + hex.r() + hex.s(), 0);
                assert_eq!((hex.x(), hex.y()), (x, y));
            }
        }
    }

    #[test]
    fn test_all_directions_are_unit_length() {
        for direction in HexDirection::ALL {
            assert_eq!(direction.unit().length(), 1);
        }
    }

    #[test]
    fn test_neighbors_are_adjacent() {
        let center = HexVector::from_offset(4, 4);
        for direction in HexDirection::ALL {
            assert_eq!(center.distance(center.neighbor(direction)), 1);
        }
    }

    #[test]
    fn test_six_rotations_are_identity() {
        let hex = HexVector::from_cubic(2, -3, 1).unwrap();
        let mut rotated = hex;
        for _ in 0..6 {
            rotated = rotated.rotate_left();
        }
        assert_eq!(rotated, hex);

        let mut rotated = hex;
        for _ in 0..6 {
            rotated = rotated.rotate_right();
        }
        assert_eq!(rotated, hex);
    }

    #[test]
    fn test_rotation_preserves_length() {
        let hex = HexVector::from_cubic(2, -3, 1).unwrap();
        assert_eq!(hex.rotate_left().length(), hex.length());
        assert_eq!(hex.rotate_right().length(), hex.length());
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let hex = HexVector::from_offset(3, 7);
        assert_eq!(hex.distance(hex), 0);
    }

    #[test]
    fn test_length_formula() {
        let hex = HexVector::from_cubic(2, -3, 1).unwrap();
        assert_eq!(hex.length(), 3);
        assert_eq!(HexVector::ZERO.length(), 0);
    }

    #[test]
    fn test_arithmetic_preserves_invariant() {
        let a = HexVector::from_cubic(2, -3, 1).unwrap();
        let b = HexVector::from_cubic(-1, 1, 0).unwrap();
        for hex in [a + b, a - b, a * 3] {
            assert_eq!(hex.q() + hex.r() + hex.s(), 0);
        }
        assert_eq!((a * 2) / 2, a);
    }

    #[test]
    #[should_panic(expected = "invalid hex")]
    fn test_inexact_division_panics() {
        let hex = HexVector::from_cubic(1, 1, -2).unwrap();
        let _ = hex / 2;
    }
}
