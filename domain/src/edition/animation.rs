//! Entrance animation math
//!
//! Pure timing functions; the presentation layer decides how to draw frames.

use std::time::Duration;

/// Duration of the headline AQI counter
pub const AQI_COUNTER_DURATION: Duration = Duration::from_millis(2000);
/// Delay between pollutant rows
pub const POLLUTANT_STAGGER: Duration = Duration::from_millis(100);
/// Delay between health risk articles
pub const RISK_STAGGER: Duration = Duration::from_millis(150);

/// Cubic ease-out over `[0, 1]`
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// A number that counts up from zero to its target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Typewriter {
    target: f64,
    duration: Duration,
}

impl Typewriter {
    pub fn new(target: f64, duration: Duration) -> Self {
        Self { target, duration }
    }

    /// Counter for the headline AQI
    pub fn aqi(target: f64) -> Self {
        Self::new(target, AQI_COUNTER_DURATION)
    }

    /// Fraction of the animation completed after `elapsed`
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Displayed value after `elapsed`
    pub fn value_at(&self, elapsed: Duration) -> i64 {
        (self.target * ease_out_cubic(self.progress(elapsed))).round() as i64
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        self.progress(elapsed) >= 1.0
    }

    /// Values shown when sampling every `step`, ending on the final value
    pub fn frames(&self, step: Duration) -> Vec<i64> {
        if step.is_zero() {
            return vec![self.value_at(self.duration)];
        }
        let mut frames = Vec::new();
        let mut elapsed = Duration::ZERO;
        while !self.is_finished(elapsed) {
            frames.push(self.value_at(elapsed));
            elapsed += step;
        }
        frames.push(self.value_at(self.duration));
        frames
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

/// Fixed delay between consecutive items of a list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    step: Duration,
}

impl Stagger {
    pub fn new(step: Duration) -> Self {
        Self { step }
    }

    pub fn pollutants() -> Self {
        Self::new(POLLUTANT_STAGGER)
    }

    pub fn risks() -> Self {
        Self::new(RISK_STAGGER)
    }

    /// Delay before item `index` appears
    pub fn delay(&self, index: usize) -> Duration {
        self.step * index as u32
    }

    pub fn step(&self) -> Duration {
        self.step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_cubic_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(0.5), 0.875);
        assert_eq!(ease_out_cubic(-1.0), 0.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
    }

    #[test]
    fn test_typewriter_values() {
        let counter = Typewriter::aqi(200.0);
        assert_eq!(counter.value_at(Duration::ZERO), 0);
        assert_eq!(counter.value_at(Duration::from_millis(1000)), 175);
        assert_eq!(counter.value_at(Duration::from_millis(2000)), 200);
        assert_eq!(counter.value_at(Duration::from_millis(5000)), 200);
    }

    #[test]
    fn test_frames_end_on_target_and_never_decrease() {
        let counter = Typewriter::new(163.0, Duration::from_millis(400));
        let frames = counter.frames(Duration::from_millis(50));
        assert_eq!(frames.first(), Some(&0));
        assert_eq!(frames.last(), Some(&163));
        assert!(frames.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(frames.len(), 9);
    }

    #[test]
    fn test_zero_duration_jumps_to_target() {
        let counter = Typewriter::new(42.0, Duration::ZERO);
        assert_eq!(counter.value_at(Duration::ZERO), 42);
        assert_eq!(counter.frames(Duration::from_millis(16)), vec![42]);
    }

    #[test]
    fn test_stagger_delays() {
        assert_eq!(Stagger::pollutants().delay(0), Duration::ZERO);
        assert_eq!(Stagger::pollutants().delay(5), Duration::from_millis(500));
        assert_eq!(Stagger::risks().delay(2), Duration::from_millis(300));
    }
}
