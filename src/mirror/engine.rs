//! Planning and performing a mirrored copy

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::config::{MarkerMode, MirrorConfig};
use super::marker::relative_after_marker;
use crate::cli::path_mapping::map_relative_to_output;
use crate::error::{IoOperation, MirrorError, MirrorResult};

/// Paths computed for one copy, before anything is written
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CopyPlan {
    /// Input as given; this is the path that gets copied
    pub source: PathBuf,
    /// Canonical input, used only for the marker search
    pub canonical_source: PathBuf,
    pub mode: MarkerMode,
    pub relative_dir: String,
    pub relative_file: String,
    pub destination_dir: PathBuf,
    pub destination_file: PathBuf,
}

/// Outcome of an executed plan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CopyReport {
    #[serde(flatten)]
    pub plan: CopyPlan,
    /// False when the destination directory was already there
    pub created_dir: bool,
    pub bytes_copied: u64,
}

/// What [`MirrorEngine::run`] did
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// Dry run: the plan was computed and checked, nothing written
    Planned(CopyPlan),
    Copied(CopyReport),
}

impl RunOutcome {
    pub fn plan(&self) -> &CopyPlan {
        match self {
            RunOutcome::Planned(plan) => plan,
            RunOutcome::Copied(report) => &report.plan,
        }
    }
}

/// Runs mirrored copies for a single configuration
pub struct MirrorEngine {
    config: MirrorConfig,
}

impl MirrorEngine {
    pub fn new(config: MirrorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MirrorConfig {
        &self.config
    }

    /// Resolve the input and work out where it goes. Reads the filesystem but never writes.
    pub fn plan(&self) -> MirrorResult<CopyPlan> {
        let source = &self.config.infile;
        let mode = self.config.mode;

        let file_name = source
            .file_name()
            .ok_or_else(|| MirrorError::MissingFileName {
                path: source.clone(),
            })?;

        let canonical_source = fs::canonicalize(source)
            .map_err(|e| MirrorError::io(IoOperation::Canonicalize, source, e))?;
        let canonical_dir = canonical_source.parent().unwrap_or(Path::new(""));

        let relative_file = marker_relative(&canonical_source, mode)?;
        let relative_dir = marker_relative(canonical_dir, mode)?;

        let destination_dir = map_relative_to_output(&self.config.outdir, &relative_dir);
        let destination_file = destination_dir.join(file_name);

        Ok(CopyPlan {
            source: source.clone(),
            canonical_source,
            mode,
            relative_dir,
            relative_file,
            destination_dir,
            destination_file,
        })
    }

    /// Carry out a plan from [`MirrorEngine::plan`]. A dry run only checks the destination.
    pub fn execute(&self, plan: CopyPlan) -> MirrorResult<RunOutcome> {
        if self.config.dry_run {
            check_destination(&plan.destination_dir)?;
            return Ok(RunOutcome::Planned(plan));
        }

        execute_plan(plan).map(RunOutcome::Copied)
    }

    /// Plan and, unless this is a dry run, copy
    pub fn run(&self) -> MirrorResult<RunOutcome> {
        let plan = self.plan()?;
        self.execute(plan)
    }
}

fn marker_relative(path: &Path, mode: MarkerMode) -> MirrorResult<String> {
    let text = path.to_str().ok_or_else(|| MirrorError::NonUtf8Path {
        path: path.to_path_buf(),
    })?;

    relative_after_marker(text, mode)
        .map(str::to_string)
        .ok_or_else(|| MirrorError::marker_not_found(mode.marker(), path))
}

/// Refuse a destination directory that already exists as a regular file
pub fn check_destination(destination_dir: &Path) -> MirrorResult<()> {
    if destination_dir.is_file() {
        return Err(MirrorError::destination_is_file(destination_dir));
    }
    Ok(())
}

/// Create the destination directory if needed and copy the source into it
pub fn execute_plan(plan: CopyPlan) -> MirrorResult<CopyReport> {
    check_destination(&plan.destination_dir)?;

    let created_dir = !plan.destination_dir.exists();
    if created_dir {
        fs::create_dir_all(&plan.destination_dir)
            .map_err(|e| MirrorError::io(IoOperation::CreateDir, &plan.destination_dir, e))?;
    }

    let bytes_copied = fs::copy(&plan.source, &plan.destination_file)
        .map_err(|e| MirrorError::io(IoOperation::Copy, &plan.destination_file, e))?;

    Ok(CopyReport {
        plan,
        created_dir,
        bytes_copied,
    })
}
