//! Output formatting for check reports.
//!
//! Provides JSON and plain-text formatters for `CheckReport`.

use std::io::Write;

use crate::report::{CheckReport, Outcome};

/// Printed when the icon set is already registered.
pub const ALREADY_PRESENT_MESSAGE: &str =
    "\u{5907}\u{7528}\u{56fe}\u{6807}\u{5df2}\u{5b58}\u{5728}\u{4e8e}\u{9879}\u{76ee}\u{4e2d}";

/// Lead-in printed before the manual steps.
pub const MANUAL_STEP_HEADER: [&str; 2] = [
    "\u{9700}\u{8981}\u{624b}\u{52a8}\u{5728}Xcode\u{4e2d}\u{6dfb}\u{52a0}AppIcon-Recording.appiconset\u{6587}\u{4ef6}\u{5939}\u{5230}\u{9879}\u{76ee}",
    "\u{8bf7}\u{6309}\u{7167}\u{4ee5}\u{4e0b}\u{6b65}\u{9aa4}\u{64cd}\u{4f5c}\u{ff1a}",
];

/// Numbered manual procedure, in the order it must be performed.
pub const MANUAL_STEPS: [&str; 5] = [
    "1. \u{5728}Xcode\u{4e2d}\u{53f3}\u{952e}\u{70b9}\u{51fb}iTime\u{6587}\u{4ef6}\u{5939}",
    "2. \u{9009}\u{62e9} 'Add Files to iTime...'",
    "3. \u{9009}\u{62e9} iTime/AppIcon-Recording.appiconset \u{6587}\u{4ef6}\u{5939}",
    "4. \u{786e}\u{4fdd}\u{52fe}\u{9009} 'Copy items if needed' \u{548c} 'Create folder references'",
    "5. \u{70b9}\u{51fb} Add",
];

/// Format a `CheckReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &CheckReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format a `CheckReport` as human-readable text to a writer.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &CheckReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    match report.outcome() {
        Outcome::AlreadyPresent => writeln!(writer, "{ALREADY_PRESENT_MESSAGE}")?,
        Outcome::NeedsManualStep => {
            for line in MANUAL_STEP_HEADER.iter().chain(MANUAL_STEPS.iter()) {
                writeln!(writer, "{line}")?;
            }
        }
    }
    Ok(())
}
