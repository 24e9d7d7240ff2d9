//! Elapsed-time source owned by the display layer.
//!
//! The engine never ticks a timer. It reads a `Clock` exactly once, when the
//! last pair is found, to stamp the completion report.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Anything that can report how long the current game has been running.
pub trait Clock {
    fn elapsed(&self) -> Duration;
}

/// A fixed reading, for hosts that keep their own counter.
impl Clock for Duration {
    fn elapsed(&self) -> Duration {
        *self
    }
}

/// Time since the game started.
impl Clock for Instant {
    fn elapsed(&self) -> Duration {
        Instant::elapsed(self)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn elapsed(&self) -> Duration {
        (**self).elapsed()
    }
}

/// Elapsed game time, displayed as `M:SS`.
///
/// ```
/// use std::time::Duration;
/// use memory_match::core::ElapsedTime;
///
/// assert_eq!(ElapsedTime::from(Duration::from_secs(75)).to_string(), "1:15");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ElapsedTime(pub Duration);

impl ElapsedTime {
    /// Whole seconds elapsed.
    #[must_use]
    pub fn as_secs(self) -> u64 {
        self.0.as_secs()
    }
}

impl From<Duration> for ElapsedTime {
    fn from(duration: Duration) -> Self {
        Self(duration)
    }
}

impl std::fmt::Display for ElapsedTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let secs = self.as_secs();
        write!(f, "{}:{:02}", secs / 60, secs % 60)
    }
}
