use super::*;
use crate::foundation::core::ImageFormat;

#[test]
fn create_sink_picks_extension() {
    assert_eq!(create_sink(SinkKind::Html).extension(), "html");
    assert_eq!(create_sink(SinkKind::Json).extension(), "json");
    assert_eq!(SinkKind::default(), SinkKind::Html);
}

#[test]
fn ensure_parent_dir_creates_nested_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("a").join("b").join("deck.html");
    ensure_parent_dir(&out).unwrap();
    assert!(out.parent().unwrap().is_dir());
}

#[test]
fn encode_image_fails_as_render_error_when_file_is_gone() {
    let dir = tempfile::tempdir().unwrap();
    let asset = ImageAsset {
        local_path: dir.path().join("Mars_1.png"),
        format: ImageFormat::Png,
    };
    let err = encode_image(&asset).unwrap_err();
    assert!(matches!(err, DeckError::Render(_)));

    std::fs::write(&asset.local_path, b"abc").unwrap();
    assert_eq!(encode_image(&asset).unwrap(), "YWJj");
}
