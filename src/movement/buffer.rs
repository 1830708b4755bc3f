//! Movement domain: deadline-based action windows (jump buffer, roll buffer, coyote time).

/// An action that stays requested until a deadline.
///
/// Deadlines are absolute times in seconds on the virtual clock, kept as `f64`
/// so sub-frame windows stay exact over long sessions. The window is
/// half-open: armed at `t` for `d` seconds it is active on `[t, t + d)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimedAction {
    deadline: f64,
}

impl TimedAction {
    /// Deadline of a consumed or never-armed action.
    const EXPIRED: f64 = f64::NEG_INFINITY;

    /// Open the window; re-arming overwrites any earlier deadline.
    pub fn arm(&mut self, now: f64, duration: f32) {
        self.deadline = now + f64::from(duration);
    }

    pub fn is_active(&self, now: f64) -> bool {
        now < self.deadline
    }

    pub fn consume(&mut self) {
        self.deadline = Self::EXPIRED;
    }

    pub fn deadline(&self) -> Option<f64> {
        (self.deadline != Self::EXPIRED).then_some(self.deadline)
    }
}

impl Default for TimedAction {
    fn default() -> Self {
        Self {
            deadline: Self::EXPIRED,
        }
    }
}
