use std::path::Path;

use anyhow::Context;

use crate::{
    composition::model::{DeckMeta, SlideKind, SlideSpec, TextRun},
    foundation::{core::Rgb8, error::DeckResult},
    render::sink::{RenderSink, encode_image, write_artifact},
};

/// Format version written into every JSON deck.
pub const JSON_DECK_VERSION: u32 = 1;

#[derive(serde::Serialize)]
struct JsonDeck<'a> {
    version: u32,
    topic: &'a str,
    background: Rgb8,
    slides: Vec<JsonSlide<'a>>,
}

#[derive(serde::Serialize)]
struct JsonSlide<'a> {
    kind: SlideKind,
    title: &'a TextRun,
    #[serde(skip_serializing_if = "Option::is_none")]
    subtitle: Option<&'a TextRun>,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<&'a TextRun>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<JsonImage>,
    background: Rgb8,
}

#[derive(serde::Serialize)]
struct JsonImage {
    mime: &'static str,
    name: String,
    data_base64: String,
}

/// Writes the deck as a pretty-printed JSON document with images inlined as base64.
#[derive(Clone, Debug, Default)]
pub struct JsonDeckSink;

impl RenderSink for JsonDeckSink {
    fn extension(&self) -> &'static str {
        "json"
    }

    #[tracing::instrument(skip(self, meta, slides), fields(slides = slides.len()))]
    fn render(
        &mut self,
        meta: &DeckMeta,
        slides: &[SlideSpec],
        out_path: &Path,
    ) -> DeckResult<()> {
        let slides = slides
            .iter()
            .map(json_slide)
            .collect::<DeckResult<Vec<_>>>()?;

        let deck = JsonDeck {
            version: JSON_DECK_VERSION,
            topic: &meta.topic,
            background: meta.background,
            slides,
        };
        let bytes = serde_json::to_vec_pretty(&deck).context("serialize deck json")?;
        write_artifact(out_path, &bytes)
    }
}

fn json_slide(s: &SlideSpec) -> DeckResult<JsonSlide<'_>> {
    let image = match &s.image {
        Some(img) => Some(JsonImage {
            mime: img.format.mime_type(),
            name: img
                .local_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            data_base64: encode_image(img)?,
        }),
        None => None,
    };
    Ok(JsonSlide {
        kind: s.kind,
        title: &s.title,
        subtitle: s.subtitle.as_ref(),
        body: s.body.as_ref(),
        image,
        background: s.background,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/json.rs"]
mod tests;
