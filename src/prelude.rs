pub use eyre::{Context, Result};
pub use std::format as f;
use std::time::Instant;

pub fn stopwatch(name: &str) -> StopwatchGuard {
    let start = Instant::now();
    StopwatchGuard { name: name.to_string(), start }
}

pub struct StopwatchGuard {
    name: String,
    start: Instant,
}

impl Drop for StopwatchGuard {
    fn drop(&mut self) {
        tracing::debug!("{} took {}ms", self.name, self.start.elapsed().as_millis())
    }
}
