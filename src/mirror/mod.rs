//! Mirrored file copy
//!
//! This module contains the marker search, the invocation config and the
//! engine that plans and performs the copy.

pub mod config;
pub mod engine;
pub mod marker;

pub use config::{MarkerMode, MirrorConfig, EXTERN_MARKER, SRC_MARKER};

pub use engine::{execute_plan, CopyPlan, CopyReport, MirrorEngine, RunOutcome};

pub use marker::relative_after_marker;
