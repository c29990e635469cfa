use std::path::Path;

use anyhow::Context;
use base64::Engine as _;

use crate::{
    composition::model::{DeckMeta, ImageAsset, SlideSpec},
    foundation::error::{DeckError, DeckResult},
    render::{html::HtmlDeckSink, json::JsonDeckSink},
};

/// Persists a composed deck.
///
/// Implementations must keep slide order. Image files referenced by the slides exist for
/// the whole duration of [`RenderSink::render`] and may be deleted right after it returns,
/// so anything the artifact needs from them has to be copied in.
pub trait RenderSink {
    /// File extension of the produced artifact, without the dot.
    fn extension(&self) -> &'static str;

    /// Write `slides` to `out_path`.
    fn render(&mut self, meta: &DeckMeta, slides: &[SlideSpec], out_path: &Path)
    -> DeckResult<()>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Built-in sink selection.
pub enum SinkKind {
    /// Self-contained HTML slideshow.
    #[default]
    Html,
    /// Serialized deck document.
    Json,
}

/// Instantiate a built-in sink.
pub fn create_sink(kind: SinkKind) -> Box<dyn RenderSink> {
    match kind {
        SinkKind::Html => Box::new(HtmlDeckSink::default()),
        SinkKind::Json => Box::new(JsonDeckSink::default()),
    }
}

/// Create the parent directory of `path` if it does not exist.
pub fn ensure_parent_dir(path: &Path) -> DeckResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Read an image asset and encode it as base64.
pub(crate) fn encode_image(asset: &ImageAsset) -> DeckResult<String> {
    let bytes = std::fs::read(&asset.local_path).map_err(|e| {
        DeckError::render(format!(
            "cannot read image '{}': {e}",
            asset.local_path.display()
        ))
    })?;
    Ok(base64::engine::general_purpose::STANDARD.encode(bytes))
}

/// Write `contents` to `out_path`, mapping failures to [`DeckError::Render`].
pub(crate) fn write_artifact(out_path: &Path, contents: &[u8]) -> DeckResult<()> {
    ensure_parent_dir(out_path)?;
    std::fs::write(out_path, contents).map_err(|e| {
        DeckError::render(format!("cannot write deck '{}': {e}", out_path.display()))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/sink.rs"]
mod tests;
