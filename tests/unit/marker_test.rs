//! Unit tests for marker truncation and destination mapping through the public API

use pathmirror::cli::path_mapping::map_relative_to_output;
use pathmirror::mirror::relative_after_marker;
use pathmirror::MarkerMode;
use pretty_assertions::assert_eq;
use std::path::PathBuf;

#[test]
fn test_src_segment_after_separator() {
    let cases = [
        ("/proj/src/pkg", "pkg"),
        ("/proj/src/pkg/sub", "pkg/sub"),
        ("/a/src/b/src/c", "c"),
        ("relative/src/x/y/z", "x/y/z"),
    ];

    for (path, expected) in cases {
        assert_eq!(
            relative_after_marker(path, MarkerMode::Source),
            Some(expected),
            "path: {}",
            path
        );
    }
}

#[test]
fn test_extern_segment_is_inclusive() {
    let cases = [
        ("/home/me/cpwn_extern", "cpwn_extern"),
        ("/home/me/cpwn_extern/lua/src", "cpwn_extern/lua/src"),
        ("/x/cpwn_extern/a/cpwn_extern/b", "cpwn_extern/b"),
    ];

    for (path, expected) in cases {
        assert_eq!(relative_after_marker(path, MarkerMode::Extern), Some(expected));
    }
}

#[test]
fn test_marker_matches_inside_names() {
    // The search is on raw text, not path components.
    assert_eq!(
        relative_after_marker("/proj/mysrc/pkg", MarkerMode::Source),
        Some("pkg")
    );
}

#[test]
fn test_destination_join() {
    assert_eq!(map_relative_to_output("out", "a/b"), PathBuf::from("out/a/b"));
    assert_eq!(map_relative_to_output("out/", "a/b"), PathBuf::from("out/a/b"));
    assert_eq!(
        map_relative_to_output("/tmp/out", "cpwn_extern/zlib"),
        PathBuf::from("/tmp/out/cpwn_extern/zlib")
    );
}

#[test]
fn test_mirror_file_end_to_end() {
    let tmp = tempfile::tempdir().unwrap();
    let src_dir = tmp.path().join("proj/src/pkg");
    std::fs::create_dir_all(&src_dir).unwrap();
    let infile = src_dir.join("file.txt");
    std::fs::write(&infile, "abc").unwrap();
    let outdir = tmp.path().join("out");

    let report = pathmirror::mirror_file(
        infile.to_str().unwrap(),
        outdir.to_str().unwrap(),
        "no",
    )
    .unwrap();

    assert_eq!(report.plan.destination_file, outdir.join("pkg/file.txt"));
    assert_eq!(std::fs::read_to_string(outdir.join("pkg/file.txt")).unwrap(), "abc");
}

#[test]
fn test_mirror_file_rejects_bad_flag_before_touching_disk() {
    let tmp = tempfile::tempdir().unwrap();
    let outdir = tmp.path().join("out");

    let err = pathmirror::mirror_file("does/not/exist", outdir.to_str().unwrap(), "maybe")
        .unwrap_err();

    assert_eq!(err.exit_code(), 1);
    assert!(!outdir.exists());
}
