//! telemetry/counters.rs
//! Mutable counters updated while a chunk stream is drained.

use serde::{Deserialize, Serialize};

/// Chunk and byte counts on both sides of a transform.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamCounters {
    pub chunks_in: u64,
    pub chunks_out: u64,
    pub bytes_in: u64,
    pub bytes_out: u64,
}

impl StreamCounters {
    /// Record one chunk pulled from the raw source.
    #[inline]
    pub fn record_in(&mut self, len: usize) {
        self.chunks_in += 1;
        self.bytes_in += len as u64;
    }

    /// Record one chunk handed to the sink.
    #[inline]
    pub fn record_out(&mut self, len: usize) {
        self.chunks_out += 1;
        self.bytes_out += len as u64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_both_sides() {
        let mut c = StreamCounters::default();
        c.record_in(10);
        c.record_in(6);
        c.record_out(42);
        assert_eq!((c.chunks_in, c.bytes_in), (2, 16));
        assert_eq!((c.chunks_out, c.bytes_out), (1, 42));
    }
}
