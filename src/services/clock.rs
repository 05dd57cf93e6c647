use time::{Date, OffsetDateTime};

/// Source of "today" for due-date checks
pub trait Clock: Send + Sync {
    fn today(&self) -> Date;
}

/// Wall clock in the server's local offset, falling back to UTC when the
/// offset cannot be determined (e.g. multi-threaded processes on some Unixes)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        OffsetDateTime::now_local()
            .unwrap_or_else(|_| OffsetDateTime::now_utc())
            .date()
    }
}

/// Clock pinned to one calendar date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}
