use crate::error::{ensure_non_negative, ensure_range, SceneError};

/// Time slider: the simulation-year range the controls expose.
pub const TIME_MIN: f64 = 0.0;
pub const TIME_MAX: f64 = 100.0;
pub const TIME_STEP: f64 = 0.5;

/// Quantized, bounded simulation time as set by a slider.
///
/// The engine itself accepts any real time; this only models the control
/// surface that feeds it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSlider {
    min: f64,
    max: f64,
    step: f64,
    value: f64,
}

impl TimeSlider {
    /// Slider over `[min, max]` starting at `min`. A zero `step` disables
    /// snapping.
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self, SceneError> {
        ensure_range("time range", min, max)?;
        ensure_non_negative("time step", step)?;
        Ok(Self {
            min,
            max,
            step,
            value: min,
        })
    }

    /// Clamp into range and snap to the nearest step from `min`.
    pub fn set(&mut self, value: f64) -> f64 {
        let clamped = if value.is_nan() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        };
        let snapped = if self.step > 0.0 {
            self.min + ((clamped - self.min) / self.step).round() * self.step
        } else {
            clamped
        };
        self.value = snapped.min(self.max);
        self.value
    }

    /// Move by a signed number of steps.
    pub fn nudge(&mut self, steps: i32) -> f64 {
        self.set(self.value + steps as f64 * self.step)
    }

    /// Current simulation time in years.
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    pub fn step(&self) -> f64 {
        self.step
    }
}

impl Default for TimeSlider {
    fn default() -> Self {
        Self {
            min: TIME_MIN,
            max: TIME_MAX,
            step: TIME_STEP,
            value: TIME_MIN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_min() {
        assert_eq!(TimeSlider::default().value(), 0.0);
    }

    #[test]
    fn snaps_to_half_years() {
        let mut s = TimeSlider::default();
        assert_eq!(s.set(12.3), 12.5);
        assert_eq!(s.set(12.2), 12.0);
        assert_eq!(s.set(99.9), 100.0);
    }

    #[test]
    fn clamps_out_of_range() {
        let mut s = TimeSlider::default();
        assert_eq!(s.set(-4.0), 0.0);
        assert_eq!(s.set(250.0), 100.0);
        assert_eq!(s.set(f64::NAN), 0.0);
    }

    #[test]
    fn custom_range_snaps_from_min() {
        let mut s = TimeSlider::new(-10.0, 10.0, 4.0).unwrap();
        assert_eq!(s.value(), -10.0);
        assert_eq!(s.set(-3.0), -2.0);
        assert_eq!(s.set(9.0), 10.0);
    }

    #[test]
    fn rejects_inverted_or_nan_range() {
        assert!(matches!(
            TimeSlider::new(10.0, 0.0, 0.5),
            Err(SceneError::InvalidArgument { .. })
        ));
        assert!(TimeSlider::new(f64::NAN, 100.0, 0.5).is_err());
        assert!(TimeSlider::new(0.0, f64::NAN, 0.5).is_err());
        assert!(TimeSlider::new(0.0, 100.0, -0.5).is_err());
        assert!(TimeSlider::new(0.0, 100.0, f64::NAN).is_err());
    }

    #[test]
    fn nudge_moves_by_steps() {
        let mut s = TimeSlider::default();
        s.set(10.0);
        assert_eq!(s.nudge(3), 11.5);
        assert_eq!(s.nudge(-100), 0.0);
    }
}
