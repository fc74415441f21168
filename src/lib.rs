pub mod aggregate;
pub mod chart;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod report;

#[cfg(test)]
mod test_fixtures;

pub use error::{ReportError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Process exit code for a failed run.
#[must_use]
pub const fn exit_code_for(error: &ReportError) -> i32 {
    if error.is_config_error() {
        EXIT_CONFIG_ERROR
    } else {
        EXIT_FAILURE
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
