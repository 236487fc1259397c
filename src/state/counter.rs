#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

/// Total duration of the count-up animation.
pub const COUNT_UP_DURATION_MS: u32 = 2000;

/// Frame interval driving the animation loop.
pub const COUNT_UP_FRAME_MS: u32 = 16;

/// A single stat's count-up from 0 to `target`.
///
/// The struct is a pure function of logical time: components own the clock
/// and poll `label_at` each frame, so the animation is testable without
/// wall-clock delays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountUp {
    pub target: u32,
}

impl CountUp {
    pub fn new(target: u32) -> Self {
        Self { target }
    }

    /// Displayed value `elapsed_ms` into the animation: proportional to
    /// elapsed time, rounded, never past the target.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn value_at(self, elapsed_ms: u32) -> u32 {
        if self.is_complete(elapsed_ms) {
            return self.target;
        }
        let progress = f64::from(elapsed_ms) / f64::from(COUNT_UP_DURATION_MS);
        let value = (f64::from(self.target) * progress).round() as u32;
        value.min(self.target)
    }

    pub fn is_complete(self, elapsed_ms: u32) -> bool {
        elapsed_ms >= COUNT_UP_DURATION_MS
    }

    /// Label shown for this stat; a completed counter carries a `+` suffix.
    pub fn label_at(self, elapsed_ms: u32) -> String {
        if self.is_complete(elapsed_ms) {
            format!("{}+", self.target)
        } else {
            self.value_at(elapsed_ms).to_string()
        }
    }
}

/// One-shot latch so the stats band animates only on first visibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatsState {
    pub animated: bool,
}

impl StatsState {
    /// Arm the animation. Returns true only the first time; later
    /// intersections are ignored.
    pub fn arm(&mut self) -> bool {
        if self.animated {
            return false;
        }
        self.animated = true;
        true
    }
}
