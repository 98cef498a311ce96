// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A monotonic stopwatch used for frame pacing and pass timing.

use std::time::{Duration, Instant};

/// Measures elapsed wall-clock time from the moment it was created.
///
/// Renderer implementations use this both as the frame timer behind
/// per-second statistics and as the CPU-side stand-in for GPU pass timing.
#[derive(Debug, Clone)]
pub struct Stopwatch {
    start_time: Option<Instant>,
}

impl Stopwatch {
    /// Creates a new `Stopwatch` and starts it immediately.
    #[inline]
    pub fn new() -> Self {
        Self {
            start_time: Some(Instant::now()),
        }
    }

    /// Returns the elapsed time since the stopwatch was started.
    ///
    /// ## Returns
    /// The elapsed time as a `Duration`, or `None` if the stopwatch has not
    /// been started.
    #[inline]
    pub fn elapsed(&self) -> Option<Duration> {
        self.start_time.map(|start| start.elapsed())
    }

    /// Returns the elapsed time in whole milliseconds.
    ///
    /// ## Returns
    /// The elapsed milliseconds as a `u64`, or `None` if the stopwatch has not
    /// been started.
    #[inline]
    pub fn elapsed_ms(&self) -> Option<u64> {
        self.elapsed().map(|d| d.as_millis() as u64)
    }

    /// Returns the elapsed time in whole microseconds.
    ///
    /// ## Returns
    /// The elapsed microseconds as a `u64`, or `None` if the stopwatch has not
    /// been started.
    #[inline]
    pub fn elapsed_us(&self) -> Option<u64> {
        self.elapsed().map(|d| d.as_micros() as u64)
    }

    /// Returns the elapsed time in seconds as an `f64`.
    ///
    /// ## Returns
    /// The elapsed seconds as an `f64`, or `None` if the stopwatch has not
    /// been started.
    #[inline]
    pub fn elapsed_secs_f64(&self) -> Option<f64> {
        self.elapsed().map(|d| d.as_secs_f64())
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    const SMALL_DURATION_MS: u64 = 15;
    const SLEEP_DURATION_MS: u64 = 50;
    const SLEEP_MARGIN_MS: u64 = 200;

    #[test]
    fn creation_starts_the_timer() {
        let watch = Stopwatch::new();
        assert!(watch.elapsed().is_some());
        assert!(watch.elapsed_ms().is_some());
        assert!(watch.elapsed_us().is_some());
        assert!(watch.elapsed_secs_f64().is_some());
    }

    #[test]
    fn elapsed_time_is_near_zero_initially() {
        let watch = Stopwatch::new();
        let elapsed = watch.elapsed().expect("should have elapsed duration");
        assert!(
            elapsed < Duration::from_millis(SMALL_DURATION_MS),
            "initial elapsed duration ({elapsed:?}) should be very small"
        );
    }

    #[test]
    fn elapsed_time_grows_after_sleep() {
        let watch = Stopwatch::new();
        thread::sleep(Duration::from_millis(SLEEP_DURATION_MS));

        let elapsed_ms = watch.elapsed_ms().expect("should have elapsed ms");
        assert!(
            elapsed_ms >= SLEEP_DURATION_MS,
            "elapsed ms ({elapsed_ms}) should be >= sleep duration ({SLEEP_DURATION_MS})"
        );
        assert!(
            elapsed_ms < SLEEP_DURATION_MS + SLEEP_MARGIN_MS,
            "elapsed ms ({elapsed_ms}) should be below sleep + margin"
        );

        let elapsed_secs = watch
            .elapsed_secs_f64()
            .expect("should have elapsed seconds");
        assert!(elapsed_secs >= SLEEP_DURATION_MS as f64 / 1000.0);
    }

    #[test]
    fn default_behaves_like_new() {
        let watch = Stopwatch::default();
        assert!(watch.elapsed().is_some());
    }

    #[test]
    fn clones_share_the_original_start_time() {
        let watch1 = Stopwatch::new();
        thread::sleep(Duration::from_millis(10));
        let watch2 = watch1.clone();

        let elapsed1 = watch1.elapsed_us().unwrap();
        let elapsed2 = watch2.elapsed_us().unwrap();
        assert!(
            elapsed1.abs_diff(elapsed2) < 1000,
            "elapsed time of clones should be very close"
        );
    }
}
