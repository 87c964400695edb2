//! CLI round-trip tests.

use assert_cmd::Command;
use image::{Rgb, RgbImage};
use predicates::prelude::*;
use std::path::Path;

fn write_form(path: &Path, filled: bool) {
    let mut img = RgbImage::from_pixel(200, 200, Rgb([255, 255, 255]));
    for y in 50u32..80 {
        for x in 50u32..80 {
            let border = x < 53 || x >= 77 || y < 53 || y >= 77;
            let stripe = filled && (53..77).contains(&x) && (53..77).contains(&y) && (y - 53) % 5 < 3;
            if border || stripe {
                img.put_pixel(x, y, Rgb([0, 0, 0]));
            }
        }
    }
    img.save(path).unwrap();
}

#[test]
fn scans_a_form_and_reports_the_mark() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("form.png");
    let output = dir.path().join("annotated.png");
    write_form(&input, true);

    Command::cargo_bin("markscan")
        .unwrap()
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .args(["--skew", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"marked\": true"));

    assert!(output.exists());
}

#[test]
fn writes_report_and_binarized_dump_from_a_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("form.png");
    let output = dir.path().join("annotated.png");
    let binarized = dir.path().join("binarized.png");
    let report = dir.path().join("report.json");
    write_form(&input, false);

    let config = dir.path().join("scan.json");
    std::fs::write(
        &config,
        format!(
            r#"{{"in_file": {:?}, "out_file": {:?}, "binarized_path": {:?}}}"#,
            input, output, binarized
        ),
    )
    .unwrap();

    Command::cargo_bin("markscan")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .arg("--report")
        .arg(&report)
        .assert()
        .success();

    assert!(output.exists());
    assert!(binarized.exists());
    let report = std::fs::read_to_string(&report).unwrap();
    assert!(report.contains("\"marked\": false"));
    assert!(report.contains("\"index\": 1"));
}

#[test]
fn report_path_from_the_config_file_is_honored() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("form.png");
    let output = dir.path().join("annotated.png");
    let report = dir.path().join("report.json");
    write_form(&input, true);

    let config = dir.path().join("scan.json");
    std::fs::write(
        &config,
        format!(
            r#"{{"in_file": {:?}, "out_file": {:?}, "report_path": {:?}}}"#,
            input, output, report
        ),
    )
    .unwrap();

    Command::cargo_bin("markscan")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .assert()
        .success();

    let report = std::fs::read_to_string(&report).unwrap();
    assert!(report.contains("\"marked\": true"));
}

#[test]
fn log_level_flag_accepts_a_filter_name() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("form.png");
    let output = dir.path().join("annotated.png");
    write_form(&input, false);

    Command::cargo_bin("markscan")
        .unwrap()
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .args(["--log-level", "debug"])
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG"));
}

#[test]
fn missing_input_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("markscan")
        .unwrap()
        .args(["--input", "no-such-scan.png"])
        .arg("--output")
        .arg(dir.path().join("out.png"))
        .assert()
        .failure();
}

#[test]
fn missing_required_configuration_is_fatal() {
    Command::cargo_bin("markscan").unwrap().assert().failure();
}
