use assert_cmd::prelude::*;
use image::{Pixel, Rgba, RgbaImage};
use predicates::prelude::*;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn write_strip(path: &Path, frames: u32) {
    let mut strip = RgbaImage::new(frames * 40, 64);
    for i in 0..frames {
        for y in 10..60 {
            for x in (i * 40 + 5)..(i * 40 + 25) {
                strip.put_pixel(x, y, Rgba::from_channels(200, 30, 30, 255));
            }
        }
    }
    strip.save(path).unwrap();
}

#[test]
fn missing_input_fails() {
    Command::cargo_bin("spritestrip")
        .unwrap()
        .arg("/definitely/not/here_Strip.png")
        .assert()
        .failure()
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn writes_numbered_frames_beside_strip() {
    let dir = tempdir().unwrap();
    let strip = dir.path().join("Hero_Walk_Strip.png");
    write_strip(&strip, 4);

    Command::cargo_bin("spritestrip")
        .unwrap()
        .arg(&strip)
        .args(&["--count", "4", "--mode", "body", "--start-index", "2"])
        .assert()
        .success();

    for n in 2..6 {
        let frame = dir.path().join(format!("hero_walk_{:03}.png", n));
        assert!(frame.is_file(), "missing {}", frame.display());
    }
    let first = image::open(dir.path().join("hero_walk_002.png"))
        .unwrap()
        .to_rgba();
    assert_eq!(first.dimensions(), (1024, 1024));
    assert_eq!(first.get_pixel(502, 10).channels()[3], 255);
    assert_eq!(first.get_pixel(502, 9).channels()[3], 0);
}

#[test]
fn name_override_and_out_dir() {
    let dir = tempdir().unwrap();
    let out = tempdir().unwrap();
    let strip = dir.path().join("walk.png");
    write_strip(&strip, 2);

    Command::cargo_bin("spritestrip")
        .unwrap()
        .arg(&strip)
        .args(&["--count", "2", "--name", "Fok"])
        .arg("--out-dir")
        .arg(out.path())
        .assert()
        .success();

    assert!(out.path().join("fok_000.png").is_file());
    assert!(out.path().join("fok_001.png").is_file());
}

#[test]
fn transparent_strip_reports_shortfall() {
    let dir = tempdir().unwrap();
    let strip = dir.path().join("empty.png");
    RgbaImage::new(100, 20).save(&strip).unwrap();

    Command::cargo_bin("spritestrip")
        .unwrap()
        .arg(&strip)
        .args(&["--count", "5"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Found only 0 of 5"));
}

#[test]
fn rejects_unknown_mode() {
    let dir = tempdir().unwrap();
    let strip = dir.path().join("walk.png");
    write_strip(&strip, 1);

    Command::cargo_bin("spritestrip")
        .unwrap()
        .arg(&strip)
        .args(&["--mode", "feet"])
        .assert()
        .failure();
}
