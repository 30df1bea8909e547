use std::path::{is_separator, PathBuf, MAIN_SEPARATOR};

/// Map a marker-relative directory into the output root.
/// A separator is inserted only when `output_root` does not already end with one.
pub fn map_relative_to_output(output_root: &str, relative_dir: &str) -> PathBuf {
    let mut out = String::with_capacity(output_root.len() + relative_dir.len() + 1);
    out.push_str(output_root);
    if !output_root.ends_with(is_separator) {
        out.push(MAIN_SEPARATOR);
    }
    out.push_str(relative_dir);
    PathBuf::from(out)
}
