use std::time::{Duration, Instant};

/// Limits on a single search. A `None` limit is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchBudget {
    pub max_duration: Option<Duration>,
    pub max_iterations: Option<usize>,
}

impl SearchBudget {
    /// Builds a budget from raw limits where a non-positive number of seconds and a negative
    /// number of iterations mean unbounded. Non-finite or unrepresentably large seconds are also
    /// unbounded.
    pub fn from_limits(max_seconds: f64, max_iterations: i64) -> Self {
        // Seconds too large for a Duration are as good as no time limit.
        let max_duration = if max_seconds > 0.0 {
            Duration::try_from_secs_f64(max_seconds).ok()
        } else {
            None
        };

        Self {
            max_duration,
            max_iterations: usize::try_from(max_iterations).ok(),
        }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn iterations(max_iterations: usize) -> Self {
        Self {
            max_duration: None,
            max_iterations: Some(max_iterations),
        }
    }

    pub fn duration(max_duration: Duration) -> Self {
        Self {
            max_duration: Some(max_duration),
            max_iterations: None,
        }
    }

    pub fn with_iterations(self, max_iterations: usize) -> Self {
        Self {
            max_iterations: Some(max_iterations),
            ..self
        }
    }

    pub fn with_duration(self, max_duration: Duration) -> Self {
        Self {
            max_duration: Some(max_duration),
            ..self
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.max_duration.is_none() && self.max_iterations.is_none()
    }

    /// Instant after which no new iteration may start. None if there is no time limit or the
    /// limit is too large to represent.
    pub(crate) fn deadline(&self, start: Instant) -> Option<Instant> {
        self.max_duration
            .and_then(|max_duration| start.checked_add(max_duration))
    }
}
