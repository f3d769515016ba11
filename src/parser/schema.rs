//! Data types shared by the Time Profiler parser.

use serde::Serialize;
use std::fmt;

/// Startup landmarks looked up in Time Profiler samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKey {
    XamarinMainStart,
    VmInitStart,
    VmInitEnd,
    XamarinInitEnd,
    UiAppMain,
    FinishedLaunchingEnd,
}

impl MarkerKey {
    pub const ALL: [MarkerKey; 6] = [
        MarkerKey::XamarinMainStart,
        MarkerKey::VmInitStart,
        MarkerKey::VmInitEnd,
        MarkerKey::XamarinInitEnd,
        MarkerKey::UiAppMain,
        MarkerKey::FinishedLaunchingEnd,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MarkerKey::XamarinMainStart => "xamarin_main_start",
            MarkerKey::VmInitStart => "vm_init_start",
            MarkerKey::VmInitEnd => "vm_init_end",
            MarkerKey::XamarinInitEnd => "xamarin_init_end",
            MarkerKey::UiAppMain => "ui_app_main",
            MarkerKey::FinishedLaunchingEnd => "finished_launching_end",
        }
    }
}

impl fmt::Display for MarkerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `<row>` of the exported time-profile table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceRow<'a> {
    /// Sample time in nanoseconds since the start of the recording
    pub sample_time: u64,

    /// Raw markup of the row, including the sampled backtrace
    pub text: &'a str,
}

/// Sample times (ns) resolved for each marker
///
/// `None` means no sample matched the marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TimestampSet {
    pub xamarin_main_start: Option<u64>,
    pub vm_init_start: Option<u64>,
    pub vm_init_end: Option<u64>,
    pub xamarin_init_end: Option<u64>,
    /// Captured for reference; no duration is derived from it.
    pub ui_app_main: Option<u64>,
    pub finished_launching_end: Option<u64>,
}

impl TimestampSet {
    pub fn get(&self, key: MarkerKey) -> Option<u64> {
        match key {
            MarkerKey::XamarinMainStart => self.xamarin_main_start,
            MarkerKey::VmInitStart => self.vm_init_start,
            MarkerKey::VmInitEnd => self.vm_init_end,
            MarkerKey::XamarinInitEnd => self.xamarin_init_end,
            MarkerKey::UiAppMain => self.ui_app_main,
            MarkerKey::FinishedLaunchingEnd => self.finished_launching_end,
        }
    }

    pub fn slot_mut(&mut self, key: MarkerKey) -> &mut Option<u64> {
        match key {
            MarkerKey::XamarinMainStart => &mut self.xamarin_main_start,
            MarkerKey::VmInitStart => &mut self.vm_init_start,
            MarkerKey::VmInitEnd => &mut self.vm_init_end,
            MarkerKey::XamarinInitEnd => &mut self.xamarin_init_end,
            MarkerKey::UiAppMain => &mut self.ui_app_main,
            MarkerKey::FinishedLaunchingEnd => &mut self.finished_launching_end,
        }
    }

    /// Number of markers that were observed
    pub fn found_count(&self) -> usize {
        MarkerKey::ALL
            .iter()
            .filter(|key| self.get(**key).is_some())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_and_get_agree() {
        let mut set = TimestampSet::default();
        for (i, key) in MarkerKey::ALL.iter().enumerate() {
            *set.slot_mut(*key) = Some(i as u64 * 10);
        }
        for (i, key) in MarkerKey::ALL.iter().enumerate() {
            assert_eq!(set.get(*key), Some(i as u64 * 10), "{}", key);
        }
        assert_eq!(set.found_count(), 6);
    }

    #[test]
    fn test_serialized_field_names_match_keys() {
        let value = serde_json::to_value(TimestampSet::default()).unwrap();
        let obj = value.as_object().unwrap();
        for key in MarkerKey::ALL {
            assert!(obj.contains_key(key.as_str()), "missing {}", key);
        }
    }
}
