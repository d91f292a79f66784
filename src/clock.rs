/// Converts wall-clock time into whole simulation steps.
///
/// The clock accumulates millisecond deltas from any external driver and
/// hands back the number of steps that fit at the current speed, keeping
/// the fractional remainder. Because the remainder is carried in
/// milliseconds rather than step fractions, the speed may change between
/// calls without corrupting accumulated time.
#[derive(Debug, Clone, Copy, Default)]
pub struct StepClock {
    accumulated_ms: f64,
}

impl StepClock {
    /// Creates a clock with an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an elapsed wall-clock delta in milliseconds.
    ///
    /// # Panics
    ///
    /// Panics on a negative delta, which is always a caller bug.
    pub fn accumulate(&mut self, delta_ms: f64) {
        assert!(
            delta_ms >= 0.0,
            "negative tick delta ({delta_ms} ms) is a caller bug"
        );
        self.accumulated_ms += delta_ms;
    }

    /// Drains whole steps at `speed_cells_per_sec`, keeping the remainder.
    pub fn steps_ready(&mut self, speed_cells_per_sec: f64) -> u32 {
        assert!(
            speed_cells_per_sec > 0.0,
            "step speed must be positive, got {speed_cells_per_sec}"
        );

        let step_duration_ms = 1000.0 / speed_cells_per_sec;
        let steps = (self.accumulated_ms / step_duration_ms).floor();
        self.accumulated_ms -= steps * step_duration_ms;
        steps as u32
    }

    /// Discards accumulated time. Called on session start and on resume so
    /// a long pause never produces a burst of catch-up steps.
    pub fn reset(&mut self) {
        self.accumulated_ms = 0.0;
    }
}
