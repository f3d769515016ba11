//! Exporter that serves previously exported text.

use super::TraceExporter;
use crate::utils::error::ExportError;
use log::debug;
use std::path::{Path, PathBuf};

/// Where the fixture text comes from
#[derive(Debug, Clone)]
enum FixtureSource {
    Text(String),
    File(PathBuf),
}

/// Returns canned export text regardless of trace path or query
#[derive(Debug, Clone)]
pub struct FixtureExporter {
    source: FixtureSource,
}

impl FixtureExporter {
    /// Serve `text` for every export
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            source: FixtureSource::Text(text.into()),
        }
    }

    /// Serve the contents of an XML file written by an earlier
    /// `xctrace export` run
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            source: FixtureSource::File(path.into()),
        }
    }
}

impl TraceExporter for FixtureExporter {
    fn export_table(&self, trace_path: &Path, query: &str) -> Result<String, ExportError> {
        debug!(
            "Serving fixture export for {} (query {})",
            trace_path.display(),
            query
        );

        match &self.source {
            FixtureSource::Text(text) => Ok(text.clone()),
            FixtureSource::File(path) => {
                std::fs::read_to_string(path).map_err(|source| ExportError::ReadFailed {
                    path: path.clone(),
                    source,
                })
            }
        }
    }
}
