/// Gray level that ping-pongs between `0` and `1`.
///
/// The value moves by a fixed step per frame. Reaching a bound pins the value
/// to it and reverses direction, so the level never leaves `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClearPulse {
    value: f32,
    step: f32,
}

impl ClearPulse {
    pub const DEFAULT_STEP: f32 = 0.005;

    /// Starts at `0`, rising by `step` per frame.
    ///
    /// The sign of `step` is ignored; a non-finite step freezes the pulse.
    pub fn new(step: f32) -> Self {
        let step = if step.is_finite() { step.abs() } else { 0.0 };
        Self { value: 0.0, step }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// `true` while the level is increasing.
    #[inline]
    pub fn rising(&self) -> bool {
        self.step >= 0.0
    }

    /// Clear color for the current level.
    #[inline]
    pub fn color(&self) -> [f32; 4] {
        [self.value, self.value, self.value, 1.0]
    }

    /// Moves one step and returns the new level.
    pub fn advance(&mut self) -> f32 {
        let next = self.value + self.step;
        if next >= 1.0 {
            self.value = 1.0;
            self.step = -self.step.abs();
        } else if next <= 0.0 {
            self.value = 0.0;
            self.step = self.step.abs();
        } else {
            self.value = next;
        }
        self.value
    }
}

impl Default for ClearPulse {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STEP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_in_unit_interval() {
        for step in [0.005, 0.3, 0.7, 1.5] {
            let mut pulse = ClearPulse::new(step);
            for _ in 0..2_000 {
                let v = pulse.advance();
                assert!((0.0..=1.0).contains(&v), "step {step} produced {v}");
            }
        }
    }

    #[test]
    fn reverses_exactly_at_bounds() {
        let mut pulse = ClearPulse::new(0.25);
        let values: Vec<f32> = (0..9).map(|_| pulse.advance()).collect();
        assert_eq!(values, vec![0.25, 0.5, 0.75, 1.0, 0.75, 0.5, 0.25, 0.0, 0.25]);
    }

    #[test]
    fn direction_flips_on_top_bound() {
        let mut pulse = ClearPulse::new(0.5);
        pulse.advance();
        assert!(pulse.rising());
        pulse.advance();
        assert_eq!(pulse.value(), 1.0);
        assert!(!pulse.rising());
    }

    #[test]
    fn default_step_reaches_top_in_two_hundred_frames() {
        let mut pulse = ClearPulse::default();
        let frames = (1..=1_000).find(|_| pulse.advance() == 1.0).unwrap();
        assert!((199..=201).contains(&frames));
    }

    #[test]
    fn non_finite_step_freezes() {
        let mut pulse = ClearPulse::new(f32::NAN);
        assert_eq!(pulse.advance(), 0.0);
        assert_eq!(pulse.color(), [0.0, 0.0, 0.0, 1.0]);
    }
}
