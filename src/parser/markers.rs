//! Marker rules: which samples resolve which startup landmark.
//!
//! Every rule is checked against every row independently, so one row can
//! resolve several markers at once.

use super::schema::{MarkerKey, TimestampSet, TraceRow};

/// How repeated matches update a marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdatePolicy {
    /// Keep the earliest matching sample
    FirstWins,
    /// Keep the most recent matching sample
    LastWins,
}

/// A marker, the row fragments that identify it, and its update policy
#[derive(Debug, Clone, Copy)]
pub struct MarkerRule {
    pub key: MarkerKey,

    /// A row matches if it contains any of these fragments
    pub needles: &'static [&'static str],

    pub policy: UpdatePolicy,
}

// Frame names appear as `name="symbol"` attributes. Quoted needles pin an
// exact symbol; bare needles match anywhere in the row (managed frames carry
// namespaces and signatures around the method name).
const XAMARIN_MAIN: &[&str] = &[r#"name="xamarin_main""#];
const VM_INITIALIZE: &[&str] = &[
    r#"xamarin_vm_initialize""#,
    r#"xamarin_bridge_vm_initialize""#,
];
const XAMARIN_INITIALIZE: &[&str] = &[r#"name="xamarin_initialize""#];
const UI_APPLICATION_MAIN: &[&str] = &["xamarin_UIApplicationMain"];
// `_reportMainSceneUpdateFinished` stands in when FinishedLaunching is too
// short to be sampled.
const FINISHED_LAUNCHING: &[&str] = &["FinishedLaunching", "_reportMainSceneUpdateFinished"];

/// Marker rules in evaluation order
pub static MARKER_RULES: [MarkerRule; 6] = [
    MarkerRule {
        key: MarkerKey::XamarinMainStart,
        needles: XAMARIN_MAIN,
        policy: UpdatePolicy::FirstWins,
    },
    MarkerRule {
        key: MarkerKey::VmInitStart,
        needles: VM_INITIALIZE,
        policy: UpdatePolicy::FirstWins,
    },
    MarkerRule {
        key: MarkerKey::VmInitEnd,
        needles: VM_INITIALIZE,
        policy: UpdatePolicy::LastWins,
    },
    MarkerRule {
        key: MarkerKey::XamarinInitEnd,
        needles: XAMARIN_INITIALIZE,
        policy: UpdatePolicy::LastWins,
    },
    MarkerRule {
        key: MarkerKey::UiAppMain,
        needles: UI_APPLICATION_MAIN,
        policy: UpdatePolicy::LastWins,
    },
    MarkerRule {
        key: MarkerKey::FinishedLaunchingEnd,
        needles: FINISHED_LAUNCHING,
        policy: UpdatePolicy::LastWins,
    },
];

impl MarkerRule {
    pub fn matches(&self, row_text: &str) -> bool {
        self.needles.iter().any(|needle| row_text.contains(needle))
    }

    /// Update `set` from `row` if the row matches this rule
    ///
    /// Returns true if the stored value changed.
    pub fn apply(&self, set: &mut TimestampSet, row: &TraceRow<'_>) -> bool {
        if !self.matches(row.text) {
            return false;
        }

        let slot = set.slot_mut(self.key);
        match self.policy {
            UpdatePolicy::FirstWins if slot.is_some() => false,
            _ => slot.replace(row.sample_time) != Some(row.sample_time),
        }
    }
}

/// Look up the rule for a marker
pub fn rule_for(key: MarkerKey) -> &'static MarkerRule {
    MARKER_RULES
        .iter()
        .find(|rule| rule.key == key)
        .unwrap_or_else(|| unreachable!("every marker has a rule"))
}
