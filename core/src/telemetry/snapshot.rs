//! telemetry/snapshot.rs
//! Immutable telemetry snapshot.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::telemetry::counters::TelemetryCounters;
use crate::telemetry::timers::{StageTimes, TelemetryTimer};

/// Counters, ratio, throughput and stage timings of one finished stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub blocks: u64,
    pub blocks_fallback: u64,
    pub bytes_raw: u64,
    pub bytes_compressed: u64,
    pub bytes_overhead: u64,
    /// `bytes_compressed / bytes_raw`; 0.0 for an empty stream.
    pub compression_ratio: f64,
    pub throughput_raw_bytes_per_sec: f64,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
}

impl TelemetrySnapshot {
    pub fn from(counters: &TelemetryCounters, timer: &TelemetryTimer) -> Self {
        let elapsed = timer.elapsed();

        let compression_ratio = if counters.bytes_raw > 0 {
            counters.bytes_compressed as f64 / counters.bytes_raw as f64
        } else {
            0.0
        };

        let throughput = if elapsed.as_secs_f64() > 0.0 {
            counters.bytes_raw as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        Self {
            blocks: counters.blocks,
            blocks_fallback: counters.blocks_fallback,
            bytes_raw: counters.bytes_raw,
            bytes_compressed: counters.bytes_compressed,
            bytes_overhead: counters.bytes_overhead,
            compression_ratio,
            throughput_raw_bytes_per_sec: throughput,
            elapsed,
            stage_times: timer.stages,
        }
    }

    /// Size on the wire: payload plus structural overhead.
    pub fn output_bytes(&self) -> u64 {
        self.bytes_compressed + self.bytes_overhead
    }

    pub fn total_stage_time(&self) -> Duration {
        self.stage_times.total()
    }
}
