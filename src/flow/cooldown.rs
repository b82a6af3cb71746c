//! Resend cooldown: after a code is sent, the resend action stays disabled
//! for a fixed 60 seconds. The clock is passed in by the caller so the
//! countdown is testable without sleeping; nothing is persisted across runs.

use std::time::{Duration, Instant};

pub const RESEND_COOLDOWN: Duration = Duration::from_secs(60);

#[derive(Clone, Copy, Debug)]
pub struct ResendCooldown {
    started: Instant,
}

impl ResendCooldown {
    #[must_use]
    pub fn start(now: Instant) -> Self {
        Self { started: now }
    }

    /// Whole seconds left before resend re-enables, rounded up so the
    /// countdown shows 60..=1 and then 0.
    #[must_use]
    pub fn remaining_secs(&self, now: Instant) -> u64 {
        let elapsed = now.saturating_duration_since(self.started);
        let remaining = RESEND_COOLDOWN.saturating_sub(elapsed);
        remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0)
    }

    #[must_use]
    pub fn is_ready(&self, now: Instant) -> bool {
        self.remaining_secs(now) == 0
    }
}
