lazy_static::lazy_static! {
    static ref PERFORMANCE_FREQUENCY: i64 = query_frequency();
}

pub struct Counter {
    start_ticks: i64,
}

impl Counter {
    pub fn start() -> Self {
        Self { start_ticks: query_counter() }
    }

    pub fn elapsed(&self) -> TicksElapsed {
        TicksElapsed(query_counter() - self.start_ticks)
    }

    pub fn end(self) -> TicksElapsed {
        TicksElapsed(query_counter() - self.start_ticks)
    }
}

#[derive(Copy, Clone, Debug)]
pub struct TicksElapsed(i64);

impl TicksElapsed {
    pub fn as_secs(self) -> f64 {
        self.0 as f64 / *PERFORMANCE_FREQUENCY as f64
    }

    pub fn as_ms(self) -> f64 {
        (self.0 * 1000) as f64 / *PERFORMANCE_FREQUENCY as f64
    }
}

#[cfg(windows)]
fn query_frequency() -> i64 {
    use winapi::um::{profileapi::QueryPerformanceFrequency, winnt::LARGE_INTEGER};
    unsafe {
        let mut frequency: LARGE_INTEGER = core::mem::zeroed();
        QueryPerformanceFrequency(&mut frequency);
        *frequency.QuadPart()
    }
}

#[cfg(windows)]
fn query_counter() -> i64 {
    use winapi::um::{profileapi::QueryPerformanceCounter, winnt::LARGE_INTEGER};
    unsafe {
        let mut count: LARGE_INTEGER = core::mem::zeroed();
        QueryPerformanceCounter(&mut count);
        *count.QuadPart()
    }
}

#[cfg(not(windows))]
lazy_static::lazy_static! {
    static ref EPOCH: std::time::Instant = std::time::Instant::now();
}

// nanosecond ticks since the first query
#[cfg(not(windows))]
fn query_frequency() -> i64 {
    1_000_000_000
}

#[cfg(not(windows))]
fn query_counter() -> i64 {
    EPOCH.elapsed().as_nanos() as i64
}
