//! The fixed half-step commutation table.

use super::phase::PhaseIndex;

/// Number of coil outputs driven per motor.
pub const COIL_COUNT: usize = 4;

/// Number of phase positions in one commutation cycle.
pub const PHASE_COUNT: usize = 8;

/// One row of the commutation table: the level applied to each coil output,
/// in winding order IN1..IN4.
pub type PhasePattern = [bool; COIL_COUNT];

/// The ordered sequence of phase patterns applied to the motor windings.
///
/// Exactly [`PHASE_COUNT`] entries of [`COIL_COUNT`] levels each, fixed for
/// the lifetime of a driver. Adjacent entries (cyclically) differ in exactly
/// one coil, so traversing the table in either direction never energizes a
/// combination outside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommutationTable {
    patterns: [PhasePattern; PHASE_COUNT],
}

impl CommutationTable {
    /// The standard half-step sequence for a 4-phase unipolar motor.
    ///
    /// Each full cycle is 8 half-steps; a 28BYJ-48 with its internal gearbox
    /// takes 4096 of them per output revolution.
    pub const fn half_step() -> Self {
        const O: bool = false;
        const I: bool = true;
        Self {
            patterns: [
                [O, O, O, I],
                [O, O, I, I],
                [O, O, I, O],
                [O, I, I, O],
                [O, I, O, O],
                [I, I, O, O],
                [I, O, O, O],
                [I, O, O, I],
            ],
        }
    }

    /// Get the pattern for a phase position.
    #[inline]
    pub fn pattern(&self, phase: PhaseIndex) -> PhasePattern {
        self.patterns[phase.index()]
    }
}

impl Default for CommutationTable {
    fn default() -> Self {
        Self::half_step()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commutation::Direction;

    fn energized(pattern: PhasePattern) -> usize {
        pattern.iter().filter(|&&level| level).count()
    }

    #[test]
    fn test_every_pattern_energizes_one_or_two_coils() {
        let table = CommutationTable::half_step();
        let mut phase = PhaseIndex::ZERO;
        for _ in 0..PHASE_COUNT {
            let n = energized(table.pattern(phase));
            assert!(n == 1 || n == 2, "pattern at {:?} energizes {} coils", phase, n);
            phase.advance(Direction::Clockwise);
        }
    }

    #[test]
    fn test_adjacent_patterns_differ_in_one_coil() {
        // Holds cyclically, so a step in either direction toggles one output.
        let table = CommutationTable::half_step();
        let mut phase = PhaseIndex::ZERO;
        for _ in 0..PHASE_COUNT {
            let current = table.pattern(phase);
            phase.advance(Direction::Clockwise);
            let next = table.pattern(phase);
            let changed = current
                .iter()
                .zip(next.iter())
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(changed, 1);
        }
    }

    #[test]
    fn test_all_patterns_distinct() {
        let table = CommutationTable::half_step();
        let mut phase = PhaseIndex::ZERO;
        let mut seen: Vec<PhasePattern> = Vec::new();
        for _ in 0..PHASE_COUNT {
            let pattern = table.pattern(phase);
            assert!(!seen.contains(&pattern));
            seen.push(pattern);
            phase.advance(Direction::Clockwise);
        }
    }

    #[test]
    fn test_phase_zero_pattern() {
        let table = CommutationTable::half_step();
        assert_eq!(table.pattern(PhaseIndex::ZERO), [false, false, false, true]);
    }
}
