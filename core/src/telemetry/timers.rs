//! telemetry/timers.rs
//! Wall-clock accounting per stream stage.

use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Compress,
    Decompress,
    /// Container encode or parse.
    Frame,
    Encrypt,
    Decrypt,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::Compress,
        Stage::Decompress,
        Stage::Frame,
        Stage::Encrypt,
        Stage::Decrypt,
    ];
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Compress   => "compress",
            Stage::Decompress => "decompress",
            Stage::Frame      => "frame",
            Stage::Encrypt    => "encrypt",
            Stage::Decrypt    => "decrypt",
        })
    }
}

/// Accumulated time per stage. Serialized with one named field per stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageTimes {
    pub compress: Duration,
    pub decompress: Duration,
    pub frame: Duration,
    pub encrypt: Duration,
    pub decrypt: Duration,
}

impl StageTimes {
    fn slot(&mut self, stage: Stage) -> &mut Duration {
        match stage {
            Stage::Compress   => &mut self.compress,
            Stage::Decompress => &mut self.decompress,
            Stage::Frame      => &mut self.frame,
            Stage::Encrypt    => &mut self.encrypt,
            Stage::Decrypt    => &mut self.decrypt,
        }
    }

    pub fn add(&mut self, stage: Stage, dur: Duration) {
        *self.slot(stage) += dur;
    }

    pub fn get(&self, stage: Stage) -> Duration {
        match stage {
            Stage::Compress   => self.compress,
            Stage::Decompress => self.decompress,
            Stage::Frame      => self.frame,
            Stage::Encrypt    => self.encrypt,
            Stage::Decrypt    => self.decrypt,
        }
    }

    pub fn get_ms(&self, stage: Stage) -> f64 {
        self.get(stage).as_secs_f64() * 1_000.0
    }

    pub fn total(&self) -> Duration {
        Stage::ALL.iter().map(|&s| self.get(s)).sum()
    }

    /// Stages with non-zero time, in pipeline order.
    pub fn iter(&self) -> impl Iterator<Item = (Stage, Duration)> + '_ {
        Stage::ALL
            .into_iter()
            .map(|s| (s, self.get(s)))
            .filter(|(_, d)| !d.is_zero())
    }
}

/// Start/stop clock for one stream plus its per-stage breakdown.
#[derive(Clone, Debug)]
pub struct TelemetryTimer {
    started: Instant,
    finished: Option<Instant>,
    pub stages: StageTimes,
}

impl Default for TelemetryTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetryTimer {
    pub fn new() -> Self {
        Self { started: Instant::now(), finished: None, stages: StageTimes::default() }
    }

    /// Freeze `elapsed()`. Later calls move the end mark.
    pub fn finish(&mut self) {
        self.finished = Some(Instant::now());
    }

    pub fn add_stage_time(&mut self, stage: Stage, dur: Duration) {
        self.stages.add(stage, dur);
    }

    /// Run `f`, charging its wall time to `stage`.
    pub fn time<T>(&mut self, stage: Stage, f: impl FnOnce() -> T) -> T {
        let t = Instant::now();
        let out = f();
        self.add_stage_time(stage, t.elapsed());
        out
    }

    pub fn elapsed(&self) -> Duration {
        self.finished
            .unwrap_or_else(Instant::now)
            .duration_since(self.started)
    }
}
