//! Configuration and constants for the CLI.

/// Program used to reach xctrace (`xcrun xctrace ...`)
pub const DEFAULT_EXPORT_PROGRAM: &str = "xcrun";

/// Subcommand passed to the export program before `export`
pub const XCTRACE_SUBCOMMAND: &str = "xctrace";

/// XPath selecting the Time Profiler sample table of a trace
pub const TIME_PROFILE_XPATH: &str = "/trace-toc/run/data/table[@schema=\"time-profile\"]";

/// Sample times are nanoseconds; durations are reported in milliseconds
pub const NANOS_PER_MILLI: i128 = 1_000_000;

/// Token printed for a duration whose endpoints were not both observed
pub const NOT_AVAILABLE: &str = "N/A";

/// Current JSON report schema version
pub const REPORT_VERSION: &str = "1.0.0";

// Log filters. stdout is parsed by shell scripts, so stay quiet by default.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
pub const VERBOSE_LOG_LEVEL: &str = "debug";
