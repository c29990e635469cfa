use std::path::Path;

use anyhow::Context;

use crate::{
    composition::model::ImageAsset,
    foundation::{
        core::ImageFormat,
        error::{DeckError, DeckResult},
    },
};

/// Detect the format of `bytes` and check that they fully decode.
///
/// Only formats listed in [`ImageFormat`] are accepted.
pub fn probe_image(bytes: &[u8]) -> DeckResult<ImageFormat> {
    let detected = image::guess_format(bytes).context("detect image format")?;
    let format = ImageFormat::from_image_format(detected).ok_or_else(|| {
        DeckError::validation(format!("unsupported image format {detected:?}"))
    })?;
    image::load_from_memory_with_format(bytes, detected).context("decode image from memory")?;
    Ok(format)
}

/// Make `topic` safe to use as a file name prefix.
pub fn file_stem_for(topic: &str) -> String {
    topic
        .chars()
        .map(|c| match c {
            '/' | '\\' | '\0' => '_',
            c => c,
        })
        .collect()
}

/// File name for the `index`-th (0-based) image of `topic`: `"{topic}_{index+1}.{ext}"`.
pub fn asset_file_name(topic: &str, index: usize, format: ImageFormat) -> String {
    format!("{}_{}.{}", file_stem_for(topic), index + 1, format.extension())
}

/// Validate `bytes` and write them into `dest_dir` as the `index`-th image of `topic`.
pub fn materialize_image(
    bytes: &[u8],
    topic: &str,
    index: usize,
    dest_dir: &Path,
) -> DeckResult<ImageAsset> {
    let format = probe_image(bytes)?;
    std::fs::create_dir_all(dest_dir)
        .with_context(|| format!("create asset directory '{}'", dest_dir.display()))?;
    let local_path = dest_dir.join(asset_file_name(topic, index, format));
    let written = std::fs::write(&local_path, bytes);
    if written.is_err() {
        // Never tracked, so a partial file would outlive the run.
        let _ = std::fs::remove_file(&local_path);
    }
    written.with_context(|| format!("write image '{}'", local_path.display()))?;
    tracing::debug!(path = %local_path.display(), ?format, "materialized image");
    Ok(ImageAsset { local_path, format })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
