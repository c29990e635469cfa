use super::*;
use crate::{
    composition::model::{ImageAsset, StyleParams, TextRole},
    foundation::core::{FontFamily, ImageFormat},
};

fn run(role: TextRole, text: &str) -> TextRun {
    TextRun {
        role,
        text: text.to_string(),
        style: StyleParams {
            color: Rgb8::new(0x11, 0x22, 0x33),
            font: FontFamily::TimesNewRoman,
        },
    }
}

fn deck(image: ImageAsset) -> Vec<SlideSpec> {
    vec![
        SlideSpec {
            kind: SlideKind::Title,
            title: run(TextRole::Title, "R&D <Labs>"),
            subtitle: Some(run(TextRole::Subtitle, "Exploring and Learning about R&D <Labs>")),
            body: None,
            image: None,
            paragraph_index: None,
            background: Rgb8::WHITE,
        },
        SlideSpec {
            kind: SlideKind::Content,
            title: run(TextRole::Heading, "What is R&D <Labs>?"),
            subtitle: None,
            body: Some(run(TextRole::Body, "First \"quoted\" paragraph.")),
            image: Some(image),
            paragraph_index: Some(0),
            background: Rgb8::WHITE,
        },
    ]
}

#[test]
fn document_inlines_images_and_keeps_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("img.png");
    std::fs::write(&path, b"abc").unwrap();
    let image = ImageAsset {
        local_path: path,
        format: ImageFormat::Png,
    };
    let meta = DeckMeta {
        topic: "R&D <Labs>".to_string(),
        background: Rgb8::WHITE,
    };

    let doc = render_document(&meta, &deck(image)).unwrap();

    assert!(doc.contains("<title>R&amp;D &lt;Labs&gt;</title>"));
    assert!(doc.contains("src=\"data:image/png;base64,YWJj\""));
    assert!(doc.contains(">First \"quoted\" paragraph.</p>"));
    assert!(doc.contains("alt=\"What is R&amp;D &lt;Labs&gt;?\""));
    let first = doc.find("data-slide=\"0\"").unwrap();
    let second = doc.find("data-slide=\"1\"").unwrap();
    assert!(first < second);
    assert_eq!(doc.matches("<section").count(), 2);
    assert!(!doc.contains("<Labs>"));
}

#[test]
fn missing_image_is_a_render_error() {
    let dir = tempfile::tempdir().unwrap();
    let image = ImageAsset {
        local_path: dir.path().join("gone.png"),
        format: ImageFormat::Png,
    };
    let meta = DeckMeta {
        topic: "x".to_string(),
        background: Rgb8::WHITE,
    };
    let err = render_document(&meta, &deck(image)).unwrap_err();
    assert!(matches!(err, crate::DeckError::Render(_)));
}

#[test]
fn run_css_reflects_role_and_style() {
    let css = run_css(&run(TextRole::Heading, "h"));
    assert_eq!(
        css,
        "font-family:'Times New Roman',serif;font-size:36pt;font-weight:bold;color:#112233"
    );
    assert!(run_css(&run(TextRole::Body, "b")).contains("font-weight:normal"));
}

#[test]
fn attribute_text_escapes_quotes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("img.png");
    std::fs::write(&path, b"abc").unwrap();
    let mut slides = deck(ImageAsset {
        local_path: path,
        format: ImageFormat::Png,
    });
    slides[1].title = run(TextRole::Heading, "The \"Red\" Planet \u{2013} caf\u{e9}");
    let meta = DeckMeta {
        topic: "Mars".to_string(),
        background: Rgb8::BLACK,
    };

    let doc = render_document(&meta, &slides).unwrap();

    assert!(doc.contains("alt=\"The &quot;Red&quot; Planet \u{2013} caf\u{e9}\""));
    assert!(doc.contains(">The \"Red\" Planet \u{2013} caf\u{e9}</h2>"));
}
