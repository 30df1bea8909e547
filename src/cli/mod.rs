//! Command-line interface module

use clap::Parser;
use std::path::PathBuf;

use crate::error::{MirrorError, MirrorErrorKind, MirrorResult};
use crate::mirror::{CopyPlan, CopyReport, MarkerMode, MirrorConfig};

pub mod path_mapping;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "pathmirror")]
#[command(
    about = "Copies a file into an output directory while preserving the directory structure below src/ or cpwn_extern/"
)]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// File to copy
    #[arg(long)]
    pub infile: PathBuf,

    /// Output root directory
    #[arg(long)]
    pub outdir: String,

    /// 'no' mirrors the path after src/, 'yes' mirrors from cpwn_extern/ on
    #[arg(long = "extern", value_name = "yes|no")]
    pub extern_mode: String,

    /// Print where the file would go without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Print the copy plan or report as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub mirror_config: MirrorConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> MirrorResult<Self> {
        let mode = MarkerMode::from_flag(&args.extern_mode)?;

        let mirror_config = MirrorConfig::new(args.infile.clone(), args.outdir.clone(), mode)
            .with_dry_run(args.dry_run);

        mirror_config
            .validate()
            .map_err(|message| MirrorError::InvalidArgument { message })?;

        Ok(Self {
            args,
            mirror_config,
        })
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.args.verbose
    }

    /// Check if JSON output is requested
    pub fn want_json(&self) -> bool {
        self.args.json
    }
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            println!("{} {}", console::style("✓").green(), message);
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("{}", Self::error_line(message));
    }

    /// Show a warning message (if not in quiet mode)
    pub fn show_warning(message: &str, quiet: bool) {
        if !quiet {
            eprintln!("{} {}", console::style("⚠").yellow().for_stderr(), message);
        }
    }

    /// Show a diagnostic line (only in verbose mode)
    pub fn show_verbose(message: &str, verbose: bool) {
        if verbose {
            eprintln!("{} {}", console::style("·").dim().for_stderr(), message);
        }
    }

    /// Error line as printed on stderr
    pub fn error_line(message: &str) -> String {
        format!("{} {}", console::style("✗").red().for_stderr(), message)
    }

    /// Turn colors on or off for stdout and stderr independently
    pub fn configure_colors() {
        let no_color = std::env::var_os("NO_COLOR").is_some();
        console::set_colors_enabled(Self::should_use_color(
            atty::is(atty::Stream::Stdout),
            no_color,
        ));
        console::set_colors_enabled_stderr(Self::should_use_color(
            atty::is(atty::Stream::Stderr),
            no_color,
        ));
    }

    /// Check if output to a stream should be colored
    pub fn should_use_color(is_terminal: bool, no_color: bool) -> bool {
        is_terminal && !no_color
    }

    /// One-line summary of a plan
    pub fn describe_plan(plan: &CopyPlan) -> String {
        format!(
            "{} -> {}",
            plan.source.display(),
            plan.destination_file.display()
        )
    }

    /// One-line summary of an executed copy
    pub fn describe_report(report: &CopyReport) -> String {
        let mut line = format!(
            "Copied {} ({} bytes)",
            Self::describe_plan(&report.plan),
            report.bytes_copied
        );
        if report.created_dir {
            line.push_str(&format!(
                ", created {}",
                report.plan.destination_dir.display()
            ));
        }
        line
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &MirrorError) {
    CliUtils::show_error(&error.user_message());

    match error {
        MirrorError::MarkerNotFound { .. } => {
            eprintln!("\nTip: Use --extern yes for files under cpwn_extern/ and --extern no for files under src/");
        }
        MirrorError::DestinationIsFile { path } => {
            eprintln!("\nTip: Remove {} or choose another --outdir", path.display());
        }
        _ => {}
    }

    if error.kind() == MirrorErrorKind::Validation {
        eprintln!("\nTry 'pathmirror --help' for usage information.");
    }
}
