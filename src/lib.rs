//! Path-mirroring copy helper
//!
//! Copies one file into an output directory, recreating the part of its
//! path that follows a root marker (`src` or `cpwn_extern`).

pub mod cli;
pub mod error;
pub mod mirror;

// Re-export commonly used types
pub use error::{MirrorError, MirrorErrorKind, MirrorResult};
pub use mirror::{CopyPlan, CopyReport, MarkerMode, MirrorConfig, MirrorEngine, RunOutcome};

/// Copy `infile` under `outdir`, mirroring the path below the marker chosen by `extern_flag`
pub fn mirror_file(infile: &str, outdir: &str, extern_flag: &str) -> MirrorResult<CopyReport> {
    let mode = MarkerMode::from_flag(extern_flag)?;
    let engine = MirrorEngine::new(MirrorConfig::new(infile, outdir, mode));
    let plan = engine.plan()?;
    mirror::execute_plan(plan)
}
