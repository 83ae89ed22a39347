//! Fixed-rate real-time driver.
//!
//! Maps wall-clock time to simulation ticks at `rate_hz`. Each call to
//! [`advance`](RealtimeDriver::advance) runs every tick that has come due since
//! the last call. A single call never runs more than the catch-up budget; after a
//! stall the remaining owed ticks are dropped and the driver reports that it is
//! lagging, rather than blocking while it catches up.
//!
//! The caller passes the elapsed time in, so the driver never reads a clock.

use std::time::Duration;

use tracing::warn;

use crate::circuit::CircuitModel;
use crate::config::DriverConfig;

/// Outcome of one [`RealtimeDriver::advance`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DriverReport {
    /// Ticks simulated during this call.
    pub ticks_run: u64,
    /// Owed ticks skipped because the catch-up budget ran out.
    pub ticks_dropped: u64,
    /// True when ticks were dropped.
    pub lagging: bool,
}

/// Paces a circuit against wall-clock time.
#[derive(Clone, Debug)]
pub struct RealtimeDriver {
    rate_hz: u32,
    max_ticks_per_advance: u64,
    report_interval: Duration,
    ticks_done: u64,
    last_report: Option<Duration>,
}

impl RealtimeDriver {
    /// Creates a driver that has run no ticks yet.
    pub fn new(config: &DriverConfig) -> Self {
        Self {
            rate_hz: config.rate_hz,
            max_ticks_per_advance: config.max_ticks_per_advance(),
            report_interval: config.report_interval(),
            ticks_done: 0,
            last_report: None,
        }
    }

    /// Ticks accounted for so far, run or dropped.
    pub const fn ticks_done(&self) -> u64 {
        self.ticks_done
    }

    /// Number of ticks that should have happened `elapsed` after start.
    pub fn ticks_due(&self, elapsed: Duration) -> u64 {
        let due = elapsed.as_nanos() * u128::from(self.rate_hz) / 1_000_000_000;
        u64::try_from(due).unwrap_or(u64::MAX)
    }

    /// Runs the ticks that came due by `elapsed` (time since the driver started).
    pub fn advance(&mut self, model: &mut CircuitModel, elapsed: Duration) -> DriverReport {
        let owed = self.ticks_due(elapsed).saturating_sub(self.ticks_done);
        let ticks_run = owed.min(self.max_ticks_per_advance);
        model.step(ticks_run);

        let ticks_dropped = owed - ticks_run;
        self.ticks_done = self.ticks_done.saturating_add(owed);
        if ticks_dropped > 0 {
            model.stats_mut().ticks_dropped += ticks_dropped;
            warn!(
                ticks_run,
                ticks_dropped, "simulation is lagging behind real time, dropping ticks"
            );
        }
        DriverReport {
            ticks_run,
            ticks_dropped,
            lagging: ticks_dropped > 0,
        }
    }

    /// True at most once per report interval; the first call always reports.
    pub fn should_report(&mut self, elapsed: Duration) -> bool {
        let due = self
            .last_report
            .is_none_or(|last| elapsed.saturating_sub(last) >= self.report_interval);
        if due {
            self.last_report = Some(elapsed);
        }
        due
    }
}
