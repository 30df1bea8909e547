use clap::Parser;
use std::process::ExitCode;

use anyhow::Result;

use pathmirror::cli::{handle_error, Args, CliConfig, CliUtils};
use pathmirror::error::EXIT_IO;
use pathmirror::{MirrorEngine, MirrorError, RunOutcome};

fn main() -> ExitCode {
    let args = Args::parse();
    CliUtils::configure_colors();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<MirrorError>() {
            Some(mirror_err) => {
                handle_error(mirror_err);
                ExitCode::from(mirror_err.exit_code())
            }
            None => {
                CliUtils::show_error(&format!("{:#}", err));
                ExitCode::from(EXIT_IO)
            }
        },
    }
}

fn run(args: Args) -> Result<()> {
    let config = CliConfig::from_args(args)?;
    let verbose = config.is_verbose();
    let quiet = config.is_quiet();
    let want_json = config.want_json();

    let engine = MirrorEngine::new(config.mirror_config);
    let mirror_config = engine.config();

    CliUtils::show_verbose(
        &format!(
            "Mirroring {} into {} (--extern {}, marker '{}')",
            mirror_config.infile.display(),
            mirror_config.outdir,
            mirror_config.mode,
            mirror_config.mode.marker()
        ),
        verbose,
    );

    let plan = engine.plan()?;
    CliUtils::show_verbose(
        &format!("Resolved {}", plan.canonical_source.display()),
        verbose,
    );
    CliUtils::show_verbose(
        &format!("Relative directory: '{}'", plan.relative_dir),
        verbose,
    );

    let outcome = engine.execute(plan)?;

    match &outcome {
        RunOutcome::Planned(plan) => {
            if want_json {
                println!("{}", serde_json::to_string_pretty(plan)?);
            } else {
                CliUtils::show_warning("Dry run: nothing was written", quiet);
                CliUtils::show_success(&CliUtils::describe_plan(plan), quiet);
            }
        }
        RunOutcome::Copied(report) => {
            if want_json {
                println!("{}", serde_json::to_string_pretty(report)?);
            } else {
                CliUtils::show_success(&CliUtils::describe_report(report), quiet);
            }
        }
    }

    Ok(())
}
