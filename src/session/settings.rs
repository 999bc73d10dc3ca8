use std::time::Duration;

/// Pacing of the presentation around each round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// between accepting a move and revealing both hands
    pub reveal: Duration,
    /// between revealing the result and reopening the gate
    pub cooldown: Duration,
}

impl Settings {
    /// no pauses at all, for batch play and tests
    pub const fn instant() -> Self {
        Self {
            reveal: Duration::ZERO,
            cooldown: Duration::ZERO,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reveal: Duration::from_millis(1500),
            cooldown: Duration::from_millis(2000),
        }
    }
}
