//! Configuration for the alternate icon check.

use std::path::PathBuf;

/// Project file inspected by the CLI, relative to the app root.
pub const DEFAULT_PROJECT_PATH: &str = "iTime.xcodeproj/project.pbxproj";

/// Asset folder whose presence in the project file means the icon set is registered.
pub const RECORDING_ICON_MARKER: &str = "AppIcon-Recording.appiconset";

/// Inputs for a single check.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct CheckConfig {
    /// Path to the Xcode project file (default: `iTime.xcodeproj/project.pbxproj`).
    pub project: PathBuf,
    /// Literal substring searched for in the project file.
    pub marker: String,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            project: PathBuf::from(DEFAULT_PROJECT_PATH),
            marker: RECORDING_ICON_MARKER.to_owned(),
        }
    }
}

impl CheckConfig {
    /// Config for the given project file with the default marker.
    #[must_use]
    pub fn for_project(project: impl Into<PathBuf>) -> Self {
        Self {
            project: project.into(),
            ..Self::default()
        }
    }
}
