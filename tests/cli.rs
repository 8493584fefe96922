// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

mod common;

use common::*;
use image::RgbaImage;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run_bin(bin: &str, args: &[&Path]) -> Output {
    Command::new(bin)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_owned)
        .collect()
}

#[test]
fn compare_prints_every_verdict_and_exits_zero_on_mismatch() {
    let (_root, a, b) = two_folders("cli-compare");
    let white = RgbaImage::from_pixel(2, 2, WHITE);
    save(&a, "q1.png", &white);
    save(&a, "q2.png", &white);
    save(&b, "q1.png", &white);
    let mut changed = white.clone();
    changed.put_pixel(0, 0, BLACK);
    save(&b, "q2.png", &changed);

    let output = run_bin(env!("CARGO_BIN_EXE_lastrow_compare"), &[a.as_path(), b.as_path()]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout_lines(&output),
        vec![
            "Checking 2 image pairs for equality (except last row)...",
            "[1/2] ✅ Match: q1.png and q1.png identical except last row",
            "[2/2] ❌ Mismatch: q2.png and q2.png differ (above last row)",
            "Comparison complete. Only the bottom row was ignored.",
        ]
    );
}

#[test]
fn compare_count_mismatch_exits_one_without_header() {
    let (_root, a, b) = two_folders("cli-count");
    save(&a, "1.png", &gradient(2, 2));
    save(&a, "2.png", &gradient(2, 2));
    save(&b, "1.png", &gradient(2, 2));

    let output = run_bin(env!("CARGO_BIN_EXE_lastrow_compare"), &[a.as_path(), b.as_path()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert_eq!(
        String::from_utf8_lossy(&output.stderr).trim(),
        "Different number of PNGs (2 vs 1)"
    );
}

#[test]
fn compare_size_mismatch_keeps_earlier_verdicts() {
    let (_root, a, b) = two_folders("cli-size");
    save(&a, "1.png", &gradient(2, 2));
    save(&b, "1.png", &gradient(2, 2));
    save(&a, "2.png", &gradient(3, 2));
    save(&b, "2.png", &gradient(2, 2));

    let output = run_bin(env!("CARGO_BIN_EXE_lastrow_compare"), &[a.as_path(), b.as_path()]);

    assert_eq!(output.status.code(), Some(1));
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("[1/2] ✅"));
    assert_eq!(
        String::from_utf8_lossy(&output.stderr).trim(),
        "Image sizes differ at 2.png and 2.png: (3, 2) vs (2, 2)"
    );
}

#[test]
fn stamp_names_the_modified_folder() {
    let root = scratch_dir("cli-stamp");
    let source = root.join("answers");
    fs::create_dir(&source).unwrap();
    save(&source, "q1.png", &gradient(3, 3));

    let output = run_bin(env!("CARGO_BIN_EXE_lastrow_stamp"), &[source.as_path()]);

    assert_eq!(output.status.code(), Some(0));
    let destination = root.join("answers-modified");
    assert_eq!(
        stdout_lines(&output),
        vec![format!(
            "Every image got its last row blackened and saved into: {}",
            destination.display()
        )]
    );
    assert!(destination.join("q1.png").is_file());
}

#[test]
fn stamp_missing_folder_exits_one() {
    let root = scratch_dir("cli-stamp-missing");

    let output = run_bin(env!("CARGO_BIN_EXE_lastrow_stamp"), &[root.join("absent").as_path()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("I/O error on "));
}
