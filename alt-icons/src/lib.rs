//! # alt-icons
//!
//! Checks whether the alternate "recording" app icon set is registered in an
//! Xcode project file, and prints the manual steps to register it if not.
//!
//! The check is a plain substring search over the project file; the file's
//! structure is never parsed and the file is never written.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use alt_icons::{CheckConfig, Outcome, check_project};
//!
//! let report = check_project(&CheckConfig::default()).unwrap();
//! if report.outcome() == Outcome::NeedsManualStep {
//!     println!("icon set is not registered yet");
//! }
//! ```

mod config;
mod error;
pub mod output;
mod report;

pub use config::{CheckConfig, DEFAULT_PROJECT_PATH, RECORDING_ICON_MARKER};
pub use error::CheckError;
pub use report::{CheckReport, Outcome};

use tracing::debug;

/// Read the configured project file and test it for the marker.
///
/// # Errors
///
/// Returns [`CheckError::Read`] if the file cannot be opened or is not valid
/// UTF-8. No retry is attempted.
pub fn check_project(config: &CheckConfig) -> Result<CheckReport, CheckError> {
    let content =
        std::fs::read_to_string(&config.project).map_err(|source| CheckError::Read {
            path: config.project.clone(),
            source,
        })?;
    debug!(
        project = %config.project.display(),
        bytes = content.len(),
        "read project file"
    );

    let present = contains_marker(&content, &config.marker);
    debug!(marker = %config.marker, present, "marker search finished");

    Ok(CheckReport {
        project: config.project.clone(),
        marker: config.marker.clone(),
        present,
    })
}

/// Literal substring test; the marker may occur anywhere in the content.
#[must_use]
pub fn contains_marker(content: &str, marker: &str) -> bool {
    content.contains(marker)
}
