use chrono::{DateTime, Utc};

/// Source for the `TICKS` and `TICKSPERSEC` pseudo-variables.
pub trait Clock {
    /// Monotonic tick count.
    fn now(&self) -> i64;
    fn ticks_per_second(&self) -> i64;
}

/// Milliseconds since the machine was created.
#[derive(Debug)]
pub struct SystemClock {
    start: DateTime<Utc>,
}

impl Default for SystemClock {
    fn default() -> SystemClock {
        SystemClock { start: Utc::now() }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        Utc::now()
            .signed_duration_since(self.start)
            .num_milliseconds()
            .max(0)
    }

    fn ticks_per_second(&self) -> i64 {
        1000
    }
}
