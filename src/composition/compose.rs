use crate::{
    composition::{
        model::{ImageAsset, SlideKind, SlideSpec, TextRole, TextRun},
        style::StyleGenerator,
    },
    foundation::{
        core::Rgb8,
        error::{DeckError, DeckResult},
    },
};

/// Maximum number of characters of a paragraph forwarded to a slide.
pub const BODY_CHAR_LIMIT: usize = 1000;

/// Minimum number of paragraphs a deck can be built from.
pub const MIN_PARAGRAPHS: usize = 2;

/// Heading templates for content slides, applied in order and wrapping around.
pub const TITLE_TEMPLATES: [&str; 5] = [
    "What is {topic}?",
    "History of {topic}",
    "Key Facts About {topic}",
    "Significance of {topic}",
    "Interesting Aspects of {topic}",
];

/// Heading for the content slide at `slide_index` (0-based among content slides).
pub fn content_title(topic: &str, slide_index: usize) -> String {
    TITLE_TEMPLATES[slide_index % TITLE_TEMPLATES.len()].replace("{topic}", topic)
}

/// Subtitle shown on the title slide.
pub fn title_subtitle(topic: &str) -> String {
    format!("Exploring and Learning about {topic}")
}

/// Truncate `text` to at most `max_chars` characters, never splitting a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Merge images and paragraphs into an ordered slide sequence.
///
/// The first slide is always [`SlideKind::Title`]. Paragraph `i` becomes a content slide
/// showing `images[i % images.len()]`, until `slide_budget - 1` content slides exist or the
/// paragraphs run out. Every text run draws its own style from `styles`, so only the
/// structural fields of the result are stable across calls with an unseeded generator.
///
/// Fails with [`DeckError::InsufficientAssets`] when `images` is empty and with
/// [`DeckError::InsufficientContent`] when fewer than [`MIN_PARAGRAPHS`] paragraphs are given.
#[tracing::instrument(
    skip(images, paragraphs, styles),
    fields(images = images.len(), paragraphs = paragraphs.len())
)]
pub fn compose(
    topic: &str,
    images: &[ImageAsset],
    paragraphs: &[String],
    slide_budget: usize,
    background: Rgb8,
    styles: &mut StyleGenerator,
) -> DeckResult<Vec<SlideSpec>> {
    if images.is_empty() {
        return Err(DeckError::insufficient_assets(format!(
            "no images found for '{topic}'"
        )));
    }
    if paragraphs.len() < MIN_PARAGRAPHS {
        return Err(DeckError::insufficient_content(format!(
            "only {} paragraph(s) retrieved for '{topic}', need at least {MIN_PARAGRAPHS}; try a different topic",
            paragraphs.len()
        )));
    }
    if slide_budget == 0 {
        return Err(DeckError::validation("slide budget must be at least 1"));
    }

    let content_budget = slide_budget - 1;
    let mut slides = Vec::with_capacity(1 + content_budget.min(paragraphs.len()));

    slides.push(SlideSpec {
        kind: SlideKind::Title,
        title: run(TextRole::Title, topic.to_string(), styles),
        subtitle: Some(run(TextRole::Subtitle, title_subtitle(topic), styles)),
        body: None,
        image: None,
        paragraph_index: None,
        background,
    });

    let mut slide_index = 0usize;
    for (i, para) in paragraphs.iter().enumerate() {
        if slide_index >= content_budget {
            break;
        }

        // Keyed on the paragraph index, not slide_index.
        let image = images[i % images.len()].clone();
        let title = run(TextRole::Heading, content_title(topic, slide_index), styles);
        let body = run(
            TextRole::Body,
            truncate_chars(para, BODY_CHAR_LIMIT).to_string(),
            styles,
        );

        slides.push(SlideSpec {
            kind: SlideKind::Content,
            title,
            subtitle: None,
            body: Some(body),
            image: Some(image),
            paragraph_index: Some(i),
            background,
        });
        slide_index += 1;
    }

    tracing::debug!(slides = slides.len(), "composed deck");
    Ok(slides)
}

fn run(role: TextRole, text: String, styles: &mut StyleGenerator) -> TextRun {
    TextRun {
        role,
        text,
        style: styles.next_style(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/compose.rs"]
mod tests;
