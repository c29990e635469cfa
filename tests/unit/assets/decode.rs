use std::io::Cursor;

use super::*;

fn png_bytes() -> Vec<u8> {
    let img = image::RgbaImage::from_raw(1, 1, vec![100u8, 50u8, 200u8, 255u8]).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn probe_accepts_png_and_rejects_garbage() {
    assert_eq!(probe_image(&png_bytes()).unwrap(), ImageFormat::Png);
    assert!(probe_image(b"definitely not an image").is_err());
}

#[test]
fn probe_rejects_truncated_png() {
    let bytes = png_bytes();
    assert!(probe_image(&bytes[..bytes.len() / 2]).is_err());
}

#[test]
fn file_names_are_one_based_and_sanitized() {
    assert_eq!(asset_file_name("Mars", 0, ImageFormat::Jpeg), "Mars_1.jpeg");
    assert_eq!(asset_file_name("AC/DC", 2, ImageFormat::Png), "AC_DC_3.png");
    assert_eq!(file_stem_for("a\\b"), "a_b");
}

#[test]
fn materialize_writes_named_file() {
    let dir = tempfile::tempdir().unwrap();
    let asset = materialize_image(&png_bytes(), "Mars", 0, dir.path()).unwrap();
    assert_eq!(asset.format, ImageFormat::Png);
    assert_eq!(asset.local_path, dir.path().join("Mars_1.png"));
    assert_eq!(std::fs::read(&asset.local_path).unwrap(), png_bytes());
}

#[test]
fn materialize_writes_nothing_for_invalid_bytes() {
    let dir = tempfile::tempdir().unwrap();
    assert!(materialize_image(b"nope", "Mars", 0, dir.path()).is_err());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[cfg(target_os = "linux")]
#[test]
fn failed_write_leaves_no_file_behind() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("Mars_1.png");
    // Every write to /dev/full fails with ENOSPC after the file is opened.
    std::os::unix::fs::symlink("/dev/full", &target).unwrap();

    let err = materialize_image(&png_bytes(), "Mars", 0, dir.path()).unwrap_err();

    assert!(matches!(err, crate::DeckError::Other(_)));
    assert!(std::fs::symlink_metadata(&target).is_err());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
