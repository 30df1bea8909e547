//! Cutting a canonical path at its root marker

use super::config::MarkerMode;

/// Return the part of `path` that follows the last occurrence of the mode's
/// marker, or `None` when the marker is absent.
///
/// For [`MarkerMode::Source`] the marker and the single separator after it are
/// dropped, so `/proj/src/pkg/a.c` becomes `pkg/a.c`. A path that ends in
/// `src` yields an empty string. For [`MarkerMode::Extern`] the marker is
/// kept: `/deps/cpwn_extern/zlib` becomes `cpwn_extern/zlib`.
pub fn relative_after_marker(path: &str, mode: MarkerMode) -> Option<&str> {
    let marker = mode.marker();
    let index = path.rfind(marker)?;

    match mode {
        MarkerMode::Source => {
            let mut rest = path[index + marker.len()..].chars();
            rest.next();
            Some(rest.as_str())
        }
        MarkerMode::Extern => Some(&path[index..]),
    }
}
