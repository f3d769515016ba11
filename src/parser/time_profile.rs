//! Time Profiler table scanning.
//!
//! Turns the XML of an exported `time-profile` table into a `TimestampSet`
//! by feeding every sampled row through the marker rules.

use super::markers::MARKER_RULES;
use super::rows::parse_rows;
use super::schema::{MarkerKey, TimestampSet};
use log::{debug, info};

/// Resolve marker timestamps from exported time-profile text
///
/// **Public** - main entry point for parsing
///
/// # Arguments
/// * `xml` - Raw output of `xctrace export` (may be empty)
///
/// # Returns
/// The resolved set. Markers that never matched stay `None`; this never
/// fails.
pub fn extract_timestamps(xml: &str) -> TimestampSet {
    let mut timestamps = TimestampSet::default();

    if xml.trim().is_empty() {
        info!("Export is empty, no timestamps to extract");
        return timestamps;
    }

    for row in parse_rows(xml) {
        for rule in &MARKER_RULES {
            if rule.apply(&mut timestamps, &row) {
                debug!("{} -> {} ns", rule.key, row.sample_time);
            }
        }
    }

    for key in MarkerKey::ALL {
        match timestamps.get(key) {
            Some(ns) => debug!("Resolved {} = {} ns", key, ns),
            None => debug!("Marker {} not found", key),
        }
    }
    info!(
        "Resolved {}/{} startup markers",
        timestamps.found_count(),
        MarkerKey::ALL.len()
    );

    timestamps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_only_export() {
        assert_eq!(extract_timestamps("  \n\t"), TimestampSet::default());
    }

    #[test]
    fn test_single_row_sets_several_markers() {
        let xml = r#"<row><sample-time>42</sample-time><backtrace>
<frame name="xamarin_vm_initialize"/><frame name="xamarin_initialize"/>
<frame name="xamarin_main"/></backtrace></row>"#;

        let ts = extract_timestamps(xml);
        assert_eq!(ts.xamarin_main_start, Some(42));
        assert_eq!(ts.vm_init_start, Some(42));
        assert_eq!(ts.vm_init_end, Some(42));
        assert_eq!(ts.xamarin_init_end, Some(42));
        assert_eq!(ts.ui_app_main, None);
        assert_eq!(ts.finished_launching_end, None);
    }

    #[test]
    fn test_row_without_sample_time_contributes_nothing() {
        let xml = r#"<row><sample-time ref="1"/><frame name="xamarin_main"/></row>"#;
        assert_eq!(extract_timestamps(xml), TimestampSet::default());
    }
}
