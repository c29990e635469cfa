//! Capability seams for image and text acquisition.
//!
//! The composition engine only sees the data these traits return; live scraping
//! ([`web`]) and offline fixtures ([`local`]) are interchangeable behind them.

use std::path::Path;

use crate::{composition::model::ImageAsset, foundation::error::DeckResult};

pub(crate) mod html;
pub(crate) mod local;
pub(crate) mod web;

/// Upper bound on paragraphs a text source returns.
pub const MAX_PARAGRAPHS: usize = 5;

/// Paragraphs must be strictly longer than this many characters to be kept.
pub const MIN_PARAGRAPH_CHARS: usize = 100;

/// Produces locally materialized images for a topic.
pub trait ImageSource {
    /// Materialize up to `count` images for `topic` inside `dest_dir`.
    ///
    /// Returned assets are decodable and named `"{topic}_{n}.{ext}"` with `n` starting at 1.
    /// Returning fewer than `count` images is not an error.
    fn acquire(&mut self, topic: &str, count: usize, dest_dir: &Path)
    -> DeckResult<Vec<ImageAsset>>;
}

/// Produces summary paragraphs for a topic.
pub trait TextSource {
    /// Up to [`MAX_PARAGRAPHS`] paragraphs, each longer than [`MIN_PARAGRAPH_CHARS`].
    fn paragraphs(&mut self, topic: &str) -> DeckResult<Vec<String>>;
}

/// Keep the first [`MAX_PARAGRAPHS`] candidates that are long enough to summarize a topic.
pub fn select_paragraphs<I>(candidates: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    candidates
        .into_iter()
        .map(|p| p.trim().to_string())
        .filter(|p| p.chars().count() > MIN_PARAGRAPH_CHARS)
        .take(MAX_PARAGRAPHS)
        .collect()
}

#[cfg(test)]
#[path = "../tests/unit/source/select.rs"]
mod tests;
