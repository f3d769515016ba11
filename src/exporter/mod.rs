//! Table export from trace bundles.
//!
//! The rest of the crate only sees `TraceExporter`: a trace path and a
//! table query go in, the exported text comes out. The production
//! implementation shells out to `xctrace`; the fixture implementation
//! serves text that was exported earlier (or written by a test).

pub mod fixture;
pub mod xctrace;

use crate::utils::error::ExportError;
use std::path::Path;

pub use fixture::FixtureExporter;
pub use xctrace::XctraceExporter;

/// Source of exported trace tables
pub trait TraceExporter {
    /// Export the table selected by `query` from the trace at `trace_path`.
    ///
    /// Returns the captured text as-is. An empty string is a valid result.
    fn export_table(&self, trace_path: &Path, query: &str) -> Result<String, ExportError>;
}
