//! Phase index arithmetic and direction mapping.

use super::table::PHASE_COUNT;
use crate::config::units::Degrees;

/// Direction of motor rotation.
///
/// Clockwise traverses the commutation table forward (incrementing the phase
/// index), counter-clockwise traverses it backward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Forward table traversal (phase index increments).
    Clockwise,
    /// Backward table traversal (phase index decrements).
    CounterClockwise,
}

impl Direction {
    /// Get direction from a signed angle.
    ///
    /// Positive angles are clockwise; zero and negative angles (and NaN)
    /// are counter-clockwise.
    #[inline]
    pub fn from_angle(angle: Degrees) -> Self {
        if angle.0 > 0.0 {
            Direction::Clockwise
        } else {
            Direction::CounterClockwise
        }
    }

    /// The opposite direction.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// Position within the commutation cycle.
///
/// Always in `[0, PHASE_COUNT)`; wraps modulo [`PHASE_COUNT`] in the
/// direction of travel, so a decrement from 0 lands on 7 rather than going
/// negative. Mutated only by the step operation and persists across calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhaseIndex(u8);

impl PhaseIndex {
    /// The initial phase position.
    pub const ZERO: Self = Self(0);

    /// Get the position as a table index.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Advance one position in the given direction, wrapping modulo
    /// [`PHASE_COUNT`].
    #[inline]
    pub fn advance(&mut self, direction: Direction) {
        const N: u8 = PHASE_COUNT as u8;
        self.0 = match direction {
            Direction::Clockwise => (self.0 + 1) % N,
            // Adding N - 1 keeps the arithmetic unsigned.
            Direction::CounterClockwise => (self.0 + N - 1) % N,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clockwise_wraps_at_eight() {
        let mut phase = PhaseIndex::ZERO;
        for expected in [1, 2, 3, 4, 5, 6, 7, 0, 1] {
            phase.advance(Direction::Clockwise);
            assert_eq!(phase.index(), expected);
        }
    }

    #[test]
    fn test_counter_clockwise_wraps_to_seven() {
        let mut phase = PhaseIndex::ZERO;
        phase.advance(Direction::CounterClockwise);
        assert_eq!(phase.index(), 7);
        phase.advance(Direction::CounterClockwise);
        assert_eq!(phase.index(), 6);
    }

    #[test]
    fn test_k_steps_land_on_k_mod_eight() {
        for k in 0..100usize {
            let mut cw = PhaseIndex::ZERO;
            let mut ccw = PhaseIndex::ZERO;
            for _ in 0..k {
                cw.advance(Direction::Clockwise);
                ccw.advance(Direction::CounterClockwise);
            }
            assert_eq!(cw.index(), k % 8);
            assert_eq!(ccw.index(), (8 - k % 8) % 8);
        }
    }

    #[test]
    fn test_direction_from_angle() {
        assert_eq!(Direction::from_angle(Degrees(90.0)), Direction::Clockwise);
        assert_eq!(
            Direction::from_angle(Degrees(-90.0)),
            Direction::CounterClockwise
        );
        // Zero is counter-clockwise by contract (it never steps anyway).
        assert_eq!(
            Direction::from_angle(Degrees(0.0)),
            Direction::CounterClockwise
        );
    }

    #[test]
    fn test_reversed() {
        assert_eq!(Direction::Clockwise.reversed(), Direction::CounterClockwise);
        assert_eq!(Direction::CounterClockwise.reversed(), Direction::Clockwise);
    }
}
