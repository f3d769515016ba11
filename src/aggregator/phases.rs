//! Startup phase durations from resolved marker timestamps.
//!
//! Each phase is the distance between two markers. A phase is only
//! reported when both of its markers were observed.

use crate::parser::schema::{MarkerKey, TimestampSet};
use crate::utils::config::NANOS_PER_MILLI;
use log::debug;
use serde::Serialize;

/// Startup phases, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Native runtime bootstrap: `xamarin_main` to the end of `xamarin_initialize`
    Runtime,
    /// VM initialization: first to last `xamarin_vm_initialize` sample
    VmInit,
    /// Managed startup: end of `xamarin_initialize` to `FinishedLaunching`
    Managed,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Runtime, Phase::VmInit, Phase::Managed];

    /// Output key, e.g. `runtime_ms`
    pub fn key(self) -> &'static str {
        match self {
            Phase::Runtime => "runtime_ms",
            Phase::VmInit => "vm_init_ms",
            Phase::Managed => "managed_ms",
        }
    }

    /// (start, end) markers
    ///
    /// Managed startup has no fallback to `ui_app_main`.
    pub fn endpoints(self) -> (MarkerKey, MarkerKey) {
        match self {
            Phase::Runtime => (MarkerKey::XamarinMainStart, MarkerKey::XamarinInitEnd),
            Phase::VmInit => (MarkerKey::VmInitStart, MarkerKey::VmInitEnd),
            Phase::Managed => (MarkerKey::XamarinInitEnd, MarkerKey::FinishedLaunchingEnd),
        }
    }
}

/// Phase durations in whole milliseconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PhaseDurations {
    pub runtime_ms: Option<i64>,
    pub vm_init_ms: Option<i64>,
    pub managed_ms: Option<i64>,
}

impl PhaseDurations {
    pub fn get(&self, phase: Phase) -> Option<i64> {
        match phase {
            Phase::Runtime => self.runtime_ms,
            Phase::VmInit => self.vm_init_ms,
            Phase::Managed => self.managed_ms,
        }
    }
}

/// Milliseconds between two sample times, truncated toward zero
///
/// Negative when `end` precedes `start`.
pub fn elapsed_ms(start_ns: u64, end_ns: u64) -> i64 {
    let ms = (i128::from(end_ns) - i128::from(start_ns)) / NANOS_PER_MILLI;
    // |u64 difference| / 1e6 always fits in i64
    ms as i64
}

/// Duration of one phase, if both endpoints were observed
pub fn phase_duration(timestamps: &TimestampSet, phase: Phase) -> Option<i64> {
    let (start, end) = phase.endpoints();
    Some(elapsed_ms(timestamps.get(start)?, timestamps.get(end)?))
}

/// Calculate all phase durations
///
/// **Public** - main entry point for duration calculation
pub fn compute_durations(timestamps: &TimestampSet) -> PhaseDurations {
    let durations = PhaseDurations {
        runtime_ms: phase_duration(timestamps, Phase::Runtime),
        vm_init_ms: phase_duration(timestamps, Phase::VmInit),
        managed_ms: phase_duration(timestamps, Phase::Managed),
    };

    debug!("Computed phase durations: {:?}", durations);
    durations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_truncates_toward_zero() {
        assert_eq!(elapsed_ms(0, 1_999_999), 1);
        assert_eq!(elapsed_ms(1_999_999, 0), -1);
        assert_eq!(elapsed_ms(5, 5), 0);
    }

    #[test]
    fn test_elapsed_extremes() {
        assert_eq!(elapsed_ms(0, u64::MAX), (u64::MAX / 1_000_000) as i64);
        assert_eq!(elapsed_ms(u64::MAX, 0), -((u64::MAX / 1_000_000) as i64));
    }

    #[test]
    fn test_missing_endpoint() {
        let ts = TimestampSet {
            xamarin_main_start: Some(1_000_000),
            ..Default::default()
        };
        assert_eq!(phase_duration(&ts, Phase::Runtime), None);
    }

    #[test]
    fn test_zero_timestamp_is_present() {
        let ts = TimestampSet {
            vm_init_start: Some(0),
            vm_init_end: Some(0),
            ..Default::default()
        };
        assert_eq!(phase_duration(&ts, Phase::VmInit), Some(0));
    }

    #[test]
    fn test_managed_ignores_ui_app_main() {
        let ts = TimestampSet {
            xamarin_init_end: Some(1_000_000),
            ui_app_main: Some(9_000_000),
            ..Default::default()
        };
        assert_eq!(compute_durations(&ts).managed_ms, None);
    }
}
