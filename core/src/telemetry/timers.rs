//! telemetry/timers.rs
//! Wall-clock accounting for one drain loop.
//!
//! Pulling a chunk out of the transform chain also reads the source, so both
//! are charged to `Process`. Handing the chunk to the sink is `Write`.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    Process,
    Write,
}

/// Accumulated time per [`Stage`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StageTimes {
    process: Duration,
    write: Duration,
}

impl StageTimes {
    fn slot(&mut self, stage: Stage) -> &mut Duration {
        match stage {
            Stage::Process => &mut self.process,
            Stage::Write => &mut self.write,
        }
    }

    pub fn add(&mut self, stage: Stage, dur: Duration) {
        *self.slot(stage) += dur;
    }

    pub fn get(&self, stage: Stage) -> Duration {
        match stage {
            Stage::Process => self.process,
            Stage::Write => self.write,
        }
    }

    pub fn total(&self) -> Duration {
        self.process + self.write
    }
}

/// Clock started when a drain begins and frozen by [`TelemetryTimer::finish`].
#[derive(Debug, Clone)]
pub struct TelemetryTimer {
    started: Instant,
    frozen: Option<Duration>,
    pub stage_times: StageTimes,
}

impl TelemetryTimer {
    pub(crate) fn new() -> Self {
        Self {
            started: Instant::now(),
            frozen: None,
            stage_times: StageTimes::default(),
        }
    }

    /// Run `f`, charging its wall time to `stage`.
    pub fn time<T>(&mut self, stage: Stage, f: impl FnOnce() -> T) -> T {
        let t = Instant::now();
        let out = f();
        self.stage_times.add(stage, t.elapsed());
        out
    }

    pub fn finish(&mut self) {
        self.frozen = Some(self.started.elapsed());
    }

    /// Time since `new`, or up to `finish` once that has been called.
    pub fn elapsed(&self) -> Duration {
        self.frozen.unwrap_or_else(|| self.started.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_times_accumulate() {
        let mut times = StageTimes::default();
        times.add(Stage::Write, Duration::from_micros(5));
        times.add(Stage::Write, Duration::from_micros(7));
        assert_eq!(times.get(Stage::Write), Duration::from_micros(12));
        assert_eq!(times.get(Stage::Process), Duration::ZERO);
        assert_eq!(times.total(), Duration::from_micros(12));
    }

    #[test]
    fn finished_timer_stops_and_covers_stages() {
        let mut timer = TelemetryTimer::new();
        let v = timer.time(Stage::Process, || 7);
        assert_eq!(v, 7);
        timer.finish();
        let first = timer.elapsed();
        std::thread::sleep(Duration::from_millis(2));
        assert_eq!(timer.elapsed(), first);
        assert!(timer.stage_times.total() <= first);
    }
}
