//! Startup Trace
//!
//! Startup phase timings for .NET iOS / MAUI apps, read from Instruments
//! Time Profiler recordings.
//!
//! The `time-profile` table of a `.trace` bundle is exported with
//! `xcrun xctrace export`, sampled backtraces are scanned for startup
//! landmarks (`xamarin_main`, `xamarin_vm_initialize`, `xamarin_initialize`,
//! `FinishedLaunching`), and three phases are reported in milliseconds:
//!
//! - `runtime_ms`: native runtime bootstrap
//! - `vm_init_ms`: VM initialization
//! - `managed_ms`: managed startup up to `FinishedLaunching`
//!
//! ## Getting Started
//!
//! ```bash
//! startup-trace launch.trace
//! ```

pub mod aggregator;
pub mod commands;
pub mod exporter;
pub mod output;
pub mod parser;
pub mod utils;
