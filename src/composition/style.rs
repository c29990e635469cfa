use rand::{Rng, RngCore, SeedableRng, rngs::StdRng};

use crate::{
    composition::model::StyleParams,
    foundation::core::{FontFamily, Rgb8},
};

/// Source of per-run text styling.
///
/// Every call to [`StyleGenerator::next_style`] draws a font uniformly from
/// [`FontFamily::ALL`] and a color uniformly from the 24-bit RGB space. Draws are
/// independent of each other and of the slide content.
pub struct StyleGenerator {
    rng: Box<dyn RngCore + Send>,
}

impl StyleGenerator {
    /// Generator seeded from OS entropy; every run looks different.
    pub fn from_entropy() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Deterministic generator for reproducible decks.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    /// Wrap an arbitrary randomness source.
    pub fn from_rng(rng: impl RngCore + Send + 'static) -> Self {
        Self { rng: Box::new(rng) }
    }

    /// Draw styling for the next text run.
    pub fn next_style(&mut self) -> StyleParams {
        let color = Rgb8::from_u24(self.rng.gen_range(0..=0x00ff_ffff));
        let font = FontFamily::ALL[self.rng.gen_range(0..FontFamily::ALL.len())];
        StyleParams { color, font }
    }
}

impl Default for StyleGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl std::fmt::Debug for StyleGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleGenerator").finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/style.rs"]
mod tests;
