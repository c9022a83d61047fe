//! telemetry/snapshot.rs
//! Immutable summary of one stream run.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::telemetry::counters::StreamCounters;
use crate::telemetry::timers::{StageTimes, TelemetryTimer};
use crate::types::StreamError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub chunks_in: u64,
    pub chunks_out: u64,
    pub bytes_in: u64,
    pub bytes_out: u64,
    /// `bytes_out / bytes_in`, 0 for an empty input.
    pub size_ratio: f64,
    pub throughput_bytes_per_sec: f64,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
    /// Captured sink contents for `OutputSink::Memory`; never serialized.
    #[serde(skip)]
    pub output: Option<Vec<u8>>,
}

impl TelemetrySnapshot {
    pub fn from(counters: &StreamCounters, timer: &TelemetryTimer) -> Self {
        let elapsed = timer.elapsed();

        let size_ratio = if counters.bytes_in > 0 {
            counters.bytes_out as f64 / counters.bytes_in as f64
        } else {
            0.0
        };

        let throughput = if elapsed.as_secs_f64() > 0.0 {
            counters.bytes_in as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        Self {
            chunks_in: counters.chunks_in,
            chunks_out: counters.chunks_out,
            bytes_in: counters.bytes_in,
            bytes_out: counters.bytes_out,
            size_ratio,
            throughput_bytes_per_sec: throughput,
            elapsed,
            stage_times: timer.stage_times,
            output: None,
        }
    }

    pub fn attach_output(&mut self, buf: Vec<u8>) {
        self.output = Some(buf);
    }

    /// Stage times never exceed the elapsed wall time.
    pub fn sanity_check(&self) -> bool {
        self.stage_times.total() <= self.elapsed
    }

    pub fn to_json(&self) -> Result<String, StreamError> {
        serde_json::to_string(self).map_err(|e| StreamError::Validation(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_omits_captured_output() {
        let mut counters = StreamCounters::default();
        counters.record_in(4);
        counters.record_out(8);
        let mut timer = TelemetryTimer::new();
        timer.finish();

        let mut snap = TelemetrySnapshot::from(&counters, &timer);
        snap.attach_output(b"secret".to_vec());
        assert_eq!(snap.size_ratio, 2.0);

        let json = snap.to_json().unwrap();
        assert!(json.contains("\"bytes_out\":8"));
        assert!(!json.contains("output"));
    }
}
