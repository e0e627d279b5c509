use std::io::Write;

use alt_icons::{CheckConfig, check_project, output};
use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::info;

/// How the check outcome is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The confirmation message or the manual steps.
    #[default]
    Human,
    /// The pretty-printed check report.
    Json,
}

/// Check that the alternate app icon set is registered in the Xcode project
#[derive(Parser, Debug)]
#[command(name = "alt-icons", version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Verbosity level (-v for INFO, -vv for DEBUG)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse arguments, check the project file at its fixed path and print the outcome.
///
/// A missing marker is an informational outcome, not an error.
///
/// # Errors
///
/// Returns an error if the project file cannot be read or stdout cannot be written.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    crate::logging::init(cli.verbose);

    let config = CheckConfig::default();
    info!(project = %config.project.display(), "checking project file");
    let report = check_project(&config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Human => output::write_human(&report, &mut out)?,
        OutputFormat::Json => output::write_json(&report, &mut out)?,
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["alt-icons"]);
        assert_eq!(cli.format, OutputFormat::Human);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_format_and_verbosity() {
        let cli = Cli::parse_from(["alt-icons", "--format", "json", "-vv"]);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_input_path_is_not_a_flag() {
        assert!(Cli::try_parse_from(["alt-icons", "--project", "Other.pbxproj"]).is_err());
        assert!(Cli::try_parse_from(["alt-icons", "--strict"]).is_err());
    }
}
