//! Property tests for commutation arithmetic and rotation conversions.

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::digital::{ErrorType, OutputPin};
use embedded_hal_mock::eh1::delay::NoopDelay;
use proptest::prelude::*;

use halfstep_drive::{
    CoilOutputs, CommutationTable, Degrees, Direction, PhaseIndex, Radians, StepperDriver,
};

#[derive(Clone, Default)]
struct SharedPin(Rc<RefCell<bool>>);

impl SharedPin {
    fn is_high(&self) -> bool {
        *self.0.borrow()
    }
}

impl ErrorType for SharedPin {
    type Error = core::convert::Infallible;
}

impl OutputPin for SharedPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        *self.0.borrow_mut() = true;
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        *self.0.borrow_mut() = false;
        Ok(())
    }
}

type SharedDriver = StepperDriver<'static, SharedPin, SharedPin, SharedPin, SharedPin, NoopDelay>;

fn rig() -> ([SharedPin; 4], SharedDriver) {
    let pins = [
        SharedPin::default(),
        SharedPin::default(),
        SharedPin::default(),
        SharedPin::default(),
    ];
    let coils = CoilOutputs::new(
        pins[0].clone(),
        pins[1].clone(),
        pins[2].clone(),
        pins[3].clone(),
    );
    let driver = StepperDriver::builder()
        .coils(coils)
        .delay(NoopDelay::new())
        .build()
        .unwrap();
    (pins, driver)
}

fn levels(pins: &[SharedPin; 4]) -> [bool; 4] {
    [
        pins[0].is_high(),
        pins[1].is_high(),
        pins[2].is_high(),
        pins[3].is_high(),
    ]
}

proptest! {
    /// Stepping n forward then n back is an identity on the phase index,
    /// and for n > 0 leaves the phase-zero pattern energized.
    #[test]
    fn forward_then_back_is_identity(n in 0u32..512) {
        let table = CommutationTable::half_step();
        let (pins, mut driver) = rig();

        driver.step(n, Direction::Clockwise).unwrap();
        driver.step(n, Direction::CounterClockwise).unwrap();

        prop_assert_eq!(driver.phase().index(), 0);
        if n > 0 {
            prop_assert_eq!(levels(&pins), table.pattern(driver.phase()));
        }
    }

    /// k single steps land on k mod 8 (clockwise) and (-k) mod 8
    /// (counter-clockwise), always in [0, 8).
    #[test]
    fn phase_lands_on_k_mod_eight(k in 0usize..10_000) {
        let mut cw = PhaseIndex::ZERO;
        let mut ccw = PhaseIndex::ZERO;
        for _ in 0..k {
            cw.advance(Direction::Clockwise);
            ccw.advance(Direction::CounterClockwise);
        }
        prop_assert_eq!(cw.index(), k % 8);
        prop_assert_eq!(ccw.index(), (8 - k % 8) % 8);
        prop_assert!(cw.index() < 8);
        prop_assert!(ccw.index() < 8);
    }

    /// The energized pattern tracks the phase index through any walk.
    #[test]
    fn pattern_tracks_phase_through_any_walk(walk in prop::collection::vec(any::<bool>(), 1..200)) {
        let table = CommutationTable::half_step();
        let (pins, mut driver) = rig();

        for clockwise in walk {
            let direction = if clockwise {
                Direction::Clockwise
            } else {
                Direction::CounterClockwise
            };
            driver.step(1, direction).unwrap();
            prop_assert_eq!(levels(&pins), table.pattern(driver.phase()));
        }
    }

    /// rotate_radians issues the same step count and direction as rotate
    /// with the pre-converted degree value.
    #[test]
    fn radians_and_degrees_agree(deg in -720i32..=720) {
        let angle = Degrees(deg as f32);
        let radians = Radians((deg as f32).to_radians());

        let (_, mut by_degrees) = rig();
        let (_, mut by_radians) = rig();

        let d = by_degrees.rotate(angle).unwrap();
        let r = by_radians.rotate_radians(radians).unwrap();

        prop_assert_eq!(d, r);
        prop_assert_eq!(by_degrees.phase(), by_radians.phase());
    }

    /// Opposite rotations of the same magnitude issue the same step count.
    #[test]
    fn rotation_magnitude_ignores_sign(deg in 0.0f32..720.0) {
        let (_, mut forward) = rig();
        let (_, mut backward) = rig();

        let f = forward.rotate(Degrees(deg)).unwrap();
        let b = backward.rotate(Degrees(-deg)).unwrap();
        prop_assert_eq!(f, b);
    }
}
