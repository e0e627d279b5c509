//! Check report types.

use std::path::PathBuf;

use serde::Serialize;

/// What the caller should do after a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The icon set is already referenced by the project.
    AlreadyPresent,
    /// The icon set must be added by hand in Xcode.
    NeedsManualStep,
}

/// Result of checking one project file.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct CheckReport {
    /// The project file that was read.
    pub project: PathBuf,
    /// The marker that was searched for.
    pub marker: String,
    /// Whether the marker occurs anywhere in the file.
    pub present: bool,
}

impl CheckReport {
    /// Whether the icon set is registered or still needs the manual step.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if self.present {
            Outcome::AlreadyPresent
        } else {
            Outcome::NeedsManualStep
        }
    }
}
