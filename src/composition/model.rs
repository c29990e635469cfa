use std::path::PathBuf;

use crate::foundation::{
    core::{Background, FontFamily, ImageFormat, Rgb8},
    error::{DeckError, DeckResult},
};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
/// Immutable input for a single deck run.
pub struct TopicRequest {
    topic: String,
    slide_budget: usize,
    image_budget: usize,
    background: Background,
}

impl TopicRequest {
    /// Validate and build a request.
    ///
    /// The topic is trimmed and must be non-empty; `slide_budget` counts the title slide and
    /// must be at least 1.
    pub fn new(
        topic: impl Into<String>,
        slide_budget: usize,
        image_budget: usize,
        background: Background,
    ) -> DeckResult<Self> {
        let topic = topic.into().trim().to_string();
        if topic.is_empty() {
            return Err(DeckError::validation("topic must not be empty"));
        }
        if slide_budget == 0 {
            return Err(DeckError::validation("slide budget must be at least 1"));
        }
        Ok(Self {
            topic,
            slide_budget,
            image_budget,
            background,
        })
    }

    /// Topic the deck is about.
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Maximum number of slides, title slide included.
    pub fn slide_budget(&self) -> usize {
        self.slide_budget
    }

    /// Number of images requested from the image source.
    pub fn image_budget(&self) -> usize {
        self.image_budget
    }

    /// Slide background.
    pub fn background(&self) -> Background {
        self.background
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
/// A transient image file materialized for the current run.
///
/// Slides hold clones of this handle; deleting the backing file is the job of
/// [`crate::AssetScope`].
pub struct ImageAsset {
    /// Path of the materialized file.
    pub local_path: PathBuf,
    /// Decoded format of the file.
    pub format: ImageFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Visual parameters of one text run.
pub struct StyleParams {
    /// Text color.
    pub color: Rgb8,
    /// Font family.
    pub font: FontFamily,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Role of a text run within a slide; fixes its size and weight.
pub enum TextRole {
    /// Deck title on the title slide.
    Title,
    /// Subtitle on the title slide.
    Subtitle,
    /// Heading of a content slide.
    Heading,
    /// Paragraph text of a content slide.
    Body,
}

impl TextRole {
    /// Font size in points.
    pub fn size_pt(self) -> u16 {
        match self {
            Self::Title => 48,
            Self::Subtitle => 24,
            Self::Heading => 36,
            Self::Body => 20,
        }
    }

    /// Whether the run is set in bold.
    pub fn bold(self) -> bool {
        matches!(self, Self::Title | Self::Heading)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// A styled piece of slide text.
pub struct TextRun {
    /// Role of the run.
    pub role: TextRole,
    /// Text content.
    pub text: String,
    /// Color and font.
    pub style: StyleParams,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Slide kind.
pub enum SlideKind {
    /// Opening slide with topic and subtitle.
    Title,
    /// Heading, paragraph and image.
    Content,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// One slide as produced by [`crate::compose`] and consumed by a [`crate::RenderSink`].
pub struct SlideSpec {
    /// Slide kind.
    pub kind: SlideKind,
    /// Title run (topic on the title slide, heading on content slides).
    pub title: TextRun,
    /// Subtitle run; title slide only.
    pub subtitle: Option<TextRun>,
    /// Paragraph run; content slides only.
    pub body: Option<TextRun>,
    /// Image shown on the slide; content slides only.
    pub image: Option<ImageAsset>,
    /// Index of the source paragraph; content slides only.
    pub paragraph_index: Option<usize>,
    /// Slide fill color.
    pub background: Rgb8,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Deck-level metadata handed to render sinks alongside the slides.
pub struct DeckMeta {
    /// Topic of the deck.
    pub topic: String,
    /// Deck background color.
    pub background: Rgb8,
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
