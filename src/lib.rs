//! topicdeck builds a slide deck for a topic from scraped reference images and summary text.
//!
//! # Pipeline overview
//!
//! 1. **Acquire**: an [`ImageSource`] materializes images on disk and a [`TextSource`]
//!    returns summary paragraphs.
//! 2. **Compose**: [`compose`] merges both into an ordered `Vec<SlideSpec>`. Images are
//!    reused cyclically, the slide budget truncates the paragraphs, and headings rotate
//!    through a fixed set of templates.
//! 3. **Render**: a [`RenderSink`] persists the slides as a single deck file.
//! 4. **Clean up**: an [`AssetScope`] deletes every materialized image once rendering is
//!    done, or when any earlier stage fails.
//!
//! [`DeckPipeline`] runs the four stages in order.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure composition**: [`compose`] does no IO; its only nondeterminism is the
//!   injectable [`StyleGenerator`].
//! - **Scoped assets**: transient files never outlive the run that created them.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod composition;
mod foundation;
mod pipeline;
mod render;
mod source;

pub use assets::decode::{asset_file_name, file_stem_for, materialize_image, probe_image};
pub use assets::lifecycle::{AssetScope, CleanupReport};
pub use composition::compose::{
    BODY_CHAR_LIMIT, MIN_PARAGRAPHS, TITLE_TEMPLATES, compose, content_title, title_subtitle,
    truncate_chars,
};
pub use composition::model::{
    DeckMeta, ImageAsset, SlideKind, SlideSpec, StyleParams, TextRole, TextRun, TopicRequest,
};
pub use composition::style::StyleGenerator;
pub use foundation::core::{Background, FontFamily, ImageFormat, Rgb8};
pub use foundation::error::{DeckError, DeckResult};
pub use pipeline::{DeckOutcome, DeckPipeline, DeckRunOptions, output_file_name};
pub use render::html::{HtmlDeckSink, render_document, run_css};
pub use render::json::{JSON_DECK_VERSION, JsonDeckSink};
pub use render::sink::{RenderSink, SinkKind, create_sink, ensure_parent_dir};
pub use source::html::{extract_image_urls, extract_paragraphs};
pub use source::local::{DirImageSource, FileTextSource};
pub use source::web::{
    GOOGLE_SEARCH_URL, GoogleImageSource, HttpSettings, WIKIPEDIA_BASE_URL, WikipediaTextSource,
};
pub use source::{ImageSource, MAX_PARAGRAPHS, MIN_PARAGRAPH_CHARS, TextSource, select_paragraphs};
