//! Unit types for physical quantities.
//!
//! Provides type-safe representations of angles and step counts to prevent
//! unit confusion at compile time.

use core::ops::{Add, Neg, Sub};

use libm::{fabsf, roundf};
use serde::Deserialize;

/// Signed angular displacement in degrees.
///
/// The sign selects rotation direction: positive is clockwise, zero and
/// negative are counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Degrees(pub f32);

impl Degrees {
    /// Create a new Degrees value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Steps needed to traverse this angle at the given resolution.
    ///
    /// Computed as `round(|angle| / 360 * steps_per_revolution)`, rounding
    /// half away from zero. The sign is dropped; direction is carried
    /// separately by [`crate::commutation::Direction`].
    #[inline]
    pub fn to_steps(self, steps_per_revolution: u32) -> Steps {
        Steps(roundf(fabsf(self.0) / 360.0 * steps_per_revolution as f32) as u32)
    }
}

impl From<Radians> for Degrees {
    #[inline]
    fn from(radians: Radians) -> Self {
        Self(radians.0.to_degrees())
    }
}

impl Add for Degrees {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Degrees {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Degrees {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

/// Signed angular displacement in radians.
///
/// A unit-conversion convenience over [`Degrees`]; carries no independent
/// logic.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Radians(pub f32);

impl Radians {
    /// Create a new Radians value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }
}

impl From<Degrees> for Radians {
    #[inline]
    fn from(degrees: Degrees) -> Self {
        Self(degrees.0.to_radians())
    }
}

impl Neg for Radians {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

/// A count of individual phase transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Steps(pub u32);

impl Steps {
    /// Create a new Steps value.
    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl Add for Steps {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

/// Extension trait for creating unit types from primitives.
pub trait UnitExt {
    /// Convert to Degrees.
    fn degrees(self) -> Degrees;
    /// Convert to Radians.
    fn radians(self) -> Radians;
}

impl UnitExt for f32 {
    #[inline]
    fn degrees(self) -> Degrees {
        Degrees(self)
    }

    #[inline]
    fn radians(self) -> Radians {
        Radians(self)
    }
}
