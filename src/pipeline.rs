use std::path::PathBuf;

use crate::{
    assets::{decode::file_stem_for, lifecycle::{AssetScope, CleanupReport}},
    composition::{
        compose::compose,
        model::{DeckMeta, SlideSpec, TopicRequest},
        style::StyleGenerator,
    },
    foundation::error::{DeckError, DeckResult},
    render::sink::{RenderSink, ensure_parent_dir},
    source::{ImageSource, TextSource},
};

#[derive(Clone, Debug, PartialEq, Eq)]
/// Filesystem locations used by a run.
pub struct DeckRunOptions {
    /// Directory the deck artifact is written to.
    pub out_dir: PathBuf,
    /// Directory transient images are materialized in.
    pub work_dir: PathBuf,
}

impl Default for DeckRunOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            work_dir: PathBuf::from("."),
        }
    }
}

#[derive(Clone, Debug)]
/// Result of a successful run.
pub struct DeckOutcome {
    /// Path of the written deck.
    pub output_path: PathBuf,
    /// Slides as handed to the sink.
    pub slides: Vec<SlideSpec>,
    /// What the final asset cleanup did.
    pub cleanup: CleanupReport,
}

/// Output file name for `topic`: `"{topic}_presentation.{extension}"`.
pub fn output_file_name(topic: &str, extension: &str) -> String {
    format!("{}_presentation.{extension}", file_stem_for(topic))
}

/// Sequential acquisition, composition, rendering and cleanup for one topic.
pub struct DeckPipeline<'a> {
    images: &'a mut dyn ImageSource,
    text: &'a mut dyn TextSource,
    sink: &'a mut dyn RenderSink,
    styles: StyleGenerator,
}

impl<'a> DeckPipeline<'a> {
    /// Pipeline with entropy-seeded styling.
    pub fn new(
        images: &'a mut dyn ImageSource,
        text: &'a mut dyn TextSource,
        sink: &'a mut dyn RenderSink,
    ) -> Self {
        Self {
            images,
            text,
            sink,
            styles: StyleGenerator::from_entropy(),
        }
    }

    /// Replace the style generator, e.g. with [`StyleGenerator::seeded`].
    pub fn with_styles(mut self, styles: StyleGenerator) -> Self {
        self.styles = styles;
        self
    }

    /// Build the deck for `request`.
    ///
    /// Every image returned by the image source is tracked before composition starts and
    /// is deleted on every exit path: explicitly after a successful render, or by the scope's
    /// drop when any stage fails.
    #[tracing::instrument(skip(self, request, options), fields(topic = request.topic()))]
    pub fn run(
        &mut self,
        request: &TopicRequest,
        options: &DeckRunOptions,
    ) -> DeckResult<DeckOutcome> {
        let topic = request.topic();
        let mut scope = AssetScope::new();

        tracing::info!(count = request.image_budget(), "fetching images");
        let images = self
            .images
            .acquire(topic, request.image_budget(), &options.work_dir)?;
        for image in &images {
            scope.track(image);
        }
        if images.is_empty() {
            return Err(DeckError::insufficient_assets(format!(
                "no images found for '{topic}'; check the image source"
            )));
        }

        tracing::info!("fetching data");
        let paragraphs = self.text.paragraphs(topic)?;

        tracing::info!("creating presentation");
        let background = request.background().rgb();
        let slides = compose(
            topic,
            &images,
            &paragraphs,
            request.slide_budget(),
            background,
            &mut self.styles,
        )?;

        let output_path = options
            .out_dir
            .join(output_file_name(topic, self.sink.extension()));
        ensure_parent_dir(&output_path)?;
        let meta = DeckMeta {
            topic: topic.to_string(),
            background,
        };
        self.sink.render(&meta, &slides, &output_path)?;
        tracing::info!(path = %output_path.display(), slides = slides.len(), "presentation saved");

        let cleanup = scope.cleanup_all();
        Ok(DeckOutcome {
            output_path,
            slides,
            cleanup,
        })
    }
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
