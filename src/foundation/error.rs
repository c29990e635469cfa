/// Convenience result type used across topicdeck.
pub type DeckResult<T> = Result<T, DeckError>;

/// Top-level error taxonomy used by the deck pipeline.
#[derive(thiserror::Error, Debug)]
pub enum DeckError {
    /// No images were acquired for the topic.
    #[error("insufficient assets: {0}")]
    InsufficientAssets(String),

    /// Fewer paragraphs than a deck needs were acquired.
    #[error("insufficient content: {0}")]
    InsufficientContent(String),

    /// The render sink failed to persist the deck.
    #[error("render error: {0}")]
    Render(String),

    /// Invalid user-provided request data.
    #[error("validation error: {0}")]
    Validation(String),

    /// An image or text source could not produce its data at all.
    #[error("acquisition error: {0}")]
    Acquisition(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DeckError {
    /// Build a [`DeckError::InsufficientAssets`] value.
    pub fn insufficient_assets(msg: impl Into<String>) -> Self {
        Self::InsufficientAssets(msg.into())
    }

    /// Build a [`DeckError::InsufficientContent`] value.
    pub fn insufficient_content(msg: impl Into<String>) -> Self {
        Self::InsufficientContent(msg.into())
    }

    /// Build a [`DeckError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`DeckError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`DeckError::Acquisition`] value.
    pub fn acquisition(msg: impl Into<String>) -> Self {
        Self::Acquisition(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
