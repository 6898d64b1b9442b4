use std::time::{Duration, Instant};

pub mod binary_heap;
pub mod io;

/// runs `function` and returns how long it took together with its result
pub fn measure_time<R, F: FnOnce() -> R>(function: F) -> (Duration, R) {
    let start = Instant::now();
    let result = function();

    (start.elapsed(), result)
}
