//! Configuration options for a mirrored copy

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use crate::error::{MirrorError, MirrorResult};

/// Marker searched for when sources live in the project tree
pub const SRC_MARKER: &str = "src";

/// Marker searched for when sources come from an external dependency
pub const EXTERN_MARKER: &str = "cpwn_extern";

/// Which root marker cuts the input path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerMode {
    /// `--extern no`: cut after `src/`
    Source,
    /// `--extern yes`: cut at `cpwn_extern`, keeping the marker
    Extern,
}

impl MarkerMode {
    /// Parse the literal `--extern` flag value. Only `yes` and `no` are accepted.
    pub fn from_flag(value: &str) -> MirrorResult<Self> {
        match value {
            "no" => Ok(MarkerMode::Source),
            "yes" => Ok(MarkerMode::Extern),
            other => Err(MirrorError::invalid_mode(other)),
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            MarkerMode::Source => SRC_MARKER,
            MarkerMode::Extern => EXTERN_MARKER,
        }
    }

    pub fn as_flag(&self) -> &'static str {
        match self {
            MarkerMode::Source => "no",
            MarkerMode::Extern => "yes",
        }
    }
}

impl fmt::Display for MarkerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_flag())
    }
}

/// Everything needed to plan and run one copy
#[derive(Debug, Clone, PartialEq)]
pub struct MirrorConfig {
    /// Source file, exactly as given on the command line
    pub infile: PathBuf,
    /// Output root, kept as a string so a trailing separator survives
    pub outdir: String,
    pub mode: MarkerMode,
    /// Compute the plan without touching the filesystem
    pub dry_run: bool,
}

impl MirrorConfig {
    pub fn new(infile: impl Into<PathBuf>, outdir: impl Into<String>, mode: MarkerMode) -> Self {
        Self {
            infile: infile.into(),
            outdir: outdir.into(),
            mode,
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.infile.as_os_str().is_empty() {
            return Err("--infile must not be empty".to_string());
        }

        if self.outdir.is_empty() {
            return Err("--outdir must not be empty".to_string());
        }

        Ok(())
    }
}
