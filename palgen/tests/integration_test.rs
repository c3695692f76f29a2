use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn run(dir: &Path, svg: &str, x11: &str) -> (usize, String) {
    let svg_path = write_file(dir, "svg.txt", svg);
    let x11_path = write_file(dir, "rgb.txt", x11);
    let out_path = dir.join("colors.rs");

    let count = palgen::generate(&svg_path, &x11_path, &out_path).unwrap();
    (count, fs::read_to_string(out_path).unwrap())
}

#[test]
fn test_aliceblue_round_trip() {
    let dir = tempdir().unwrap();
    let (count, out) = run(dir.path(), "aliceblue 240 248 255\n", "");

    assert_eq!(count, 1);
    assert_eq!(
        out,
        "use egui::Color32;\n\
         \n\
         pub const ALICEBLUE: Color32 = Color32::from_rgb(240, 248, 255);\n\
         \n\
         pub const ALL: [(Color32, &str); 1] = [\n\
         (ALICEBLUE, \"aliceblue\"),\n\
         ];\n"
    );
}

#[test]
fn test_x11_wins_identifier_conflicts() {
    let dir = tempdir().unwrap();
    let (count, out) = run(dir.path(), "blue 0 0 255\n", "0 0 200\t\tblue\n");

    assert_eq!(count, 1);
    assert!(out.contains("pub const BLUE: Color32 = Color32::from_rgb(0, 0, 200);"));
    assert!(!out.contains("from_rgb(0, 0, 255)"));
}

#[test]
fn test_x11_filters_applied() {
    let dir = tempdir().unwrap();
    let x11 = "! X11 color names\n\
               0 0 0 Black\n\
               211 211 211 light grey\n\
               0 0 255 blue\n";
    let (count, out) = run(dir.path(), "", x11);

    assert_eq!(count, 1);
    assert!(out.contains("pub const BLUE: Color32 = Color32::from_rgb(0, 0, 255);"));
    assert!(out.contains("(BLUE, \"blue\"),"));
}

#[test]
fn test_table_size_matches_unique_identifiers() {
    let dir = tempdir().unwrap();
    let svg = "blue 0 0 255\nnavy 0 0 128\n";
    // "blue" collides with the SVG entry; "alice blue" is new.
    let x11 = "0 0 200 blue\n240 248 255 alice blue\n";
    let (count, out) = run(dir.path(), svg, x11);

    assert_eq!(count, 3);
    assert!(out.contains("pub const ALL: [(Color32, &str); 3] = ["));
}

#[test]
fn test_numbered_variants_cluster_after_base() {
    let dir = tempdir().unwrap();
    let x11 = "0 0 100 blue10\n0 0 255 blue\n0 0 238 blue2\n";
    let (_, out) = run(dir.path(), "", x11);

    let blue = out.find("(BLUE, \"blue\"),").unwrap();
    let blue2 = out.find("(BLUE2, \"blue2\"),").unwrap();
    let blue10 = out.find("(BLUE10, \"blue10\"),").unwrap();
    assert!(blue < blue2 && blue2 < blue10);
}

#[test]
fn test_empty_inputs_emit_empty_table() {
    let dir = tempdir().unwrap();
    let (count, out) = run(dir.path(), "", "! only comments here\n");

    assert_eq!(count, 0);
    assert!(out.contains("pub const ALL: [(Color32, &str); 0] = [\n];\n"));
}

#[test]
fn test_missing_input_creates_no_output() {
    let dir = tempdir().unwrap();
    let x11_path = write_file(dir.path(), "rgb.txt", "");
    let out_path = dir.path().join("colors.rs");

    let err = palgen::generate(&dir.path().join("svg.txt"), &x11_path, &out_path).unwrap_err();

    assert!(matches!(err, palgen::Error::OpenPalette { .. }));
    assert!(!out_path.exists());
}

#[test]
fn test_parse_failure_names_file_and_line() {
    let dir = tempdir().unwrap();
    let svg_path = write_file(dir.path(), "svg.txt", "blue 0 0 255\nbroken line\n");
    let x11_path = write_file(dir.path(), "rgb.txt", "");
    let out_path = dir.path().join("colors.rs");

    let err = palgen::generate(&svg_path, &x11_path, &out_path).unwrap_err();

    let message = err.to_string();
    assert!(message.contains("svg.txt"));
    assert!(message.contains(":2:"));
    assert!(!out_path.exists());
}

#[test]
fn test_failed_run_leaves_previous_output_intact() {
    let dir = tempdir().unwrap();
    let svg_path = write_file(dir.path(), "svg.txt", "not enough fields\n");
    let x11_path = write_file(dir.path(), "rgb.txt", "");
    let out_path = write_file(dir.path(), "colors.rs", "// previous generation\n");

    palgen::generate(&svg_path, &x11_path, &out_path).unwrap_err();

    assert_eq!(
        fs::read_to_string(&out_path).unwrap(),
        "// previous generation\n"
    );
}
