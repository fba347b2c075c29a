// On-disk contract for both generators: valid 1024x1024 RGB PNGs at the
// expected paths, overwritten idempotently, with no directory creation.

use arbor_icons::{badge, tree};
use image::ColorType;
use std::fs;

#[test]
fn test_badge_writes_valid_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("icon.png");

    badge::generate(&path).unwrap();

    let img = image::open(&path).unwrap();
    assert_eq!(img.width(), 1024);
    assert_eq!(img.height(), 1024);
    assert_eq!(img.color(), ColorType::Rgb8);
}

#[test]
fn test_badge_overwrite_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("icon.png");

    badge::generate(&path).unwrap();
    let first = fs::read(&path).unwrap();

    badge::generate(&path).unwrap();
    let second = fs::read(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_tree_writes_valid_png_into_existing_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let icons_dir = dir.path().join("apps/desktop/src-tauri/icons");
    fs::create_dir_all(&icons_dir).unwrap();
    let path = icons_dir.join("icon.png");

    tree::generate(&path).unwrap();

    let img = image::open(&path).unwrap().into_rgb8();
    assert_eq!(img.width(), 1024);
    assert_eq!(img.height(), 1024);

    // Background survives the PNG round trip exactly
    assert_eq!(*img.get_pixel(0, 0), image::Rgb([0xf0, 0xf9, 0xff]));
    assert_eq!(*img.get_pixel(1023, 1023), image::Rgb([0xf0, 0xf9, 0xff]));
}

#[test]
fn test_tree_fails_without_parent_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("apps/desktop/src-tauri/icons/icon.png");

    // No create_dir_all here on purpose
    assert!(tree::generate(&path).is_err());
}

#[test]
fn test_tree_overwrite_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("icons")).unwrap();
    let path = dir.path().join("icons/icon.png");

    tree::generate(&path).unwrap();
    let first = fs::read(&path).unwrap();

    tree::generate(&path).unwrap();
    let second = fs::read(&path).unwrap();

    assert_eq!(first, second);
}
