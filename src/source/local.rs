use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::{
    assets::decode::materialize_image,
    composition::model::ImageAsset,
    foundation::error::{DeckError, DeckResult},
    source::{ImageSource, TextSource, select_paragraphs},
};

/// Offline image source: copies decodable images out of a directory, sorted by file name.
///
/// Non-image files are skipped. The source directory is never modified.
#[derive(Clone, Debug)]
pub struct DirImageSource {
    dir: PathBuf,
}

impl DirImageSource {
    /// Source reading from `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ImageSource for DirImageSource {
    #[tracing::instrument(skip(self, dest_dir), fields(dir = %self.dir.display()))]
    fn acquire(
        &mut self,
        topic: &str,
        count: usize,
        dest_dir: &Path,
    ) -> DeckResult<Vec<ImageAsset>> {
        let entries = std::fs::read_dir(&self.dir).map_err(|e| {
            DeckError::acquisition(format!(
                "cannot read image directory '{}': {e}",
                self.dir.display()
            ))
        })?;

        // Materialized copies would overwrite (and later delete) the originals.
        if same_dir(&self.dir, dest_dir) {
            return Err(DeckError::validation(format!(
                "image directory '{}' must differ from the asset directory",
                self.dir.display()
            )));
        }

        let mut files: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .map(|e| e.path())
            .filter(|p| p.is_file())
            .collect();
        files.sort();

        let mut assets = Vec::new();
        for path in files {
            if assets.len() >= count {
                break;
            }
            let copied = std::fs::read(&path)
                .with_context(|| format!("read '{}'", path.display()))
                .map_err(DeckError::from)
                .and_then(|bytes| materialize_image(&bytes, topic, assets.len(), dest_dir));
            match copied {
                Ok(asset) => assets.push(asset),
                Err(err) => tracing::debug!(path = %path.display(), error = %err, "skipping file"),
            }
        }
        Ok(assets)
    }
}

fn same_dir(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Offline text source: paragraphs are blank-line separated blocks of a text file.
#[derive(Clone, Debug)]
pub struct FileTextSource {
    path: PathBuf,
}

impl FileTextSource {
    /// Source reading `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TextSource for FileTextSource {
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    fn paragraphs(&mut self, _topic: &str) -> DeckResult<Vec<String>> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| {
            DeckError::acquisition(format!(
                "cannot read text file '{}': {e}",
                self.path.display()
            ))
        })?;
        Ok(select_paragraphs(split_blocks(&text)))
    }
}

/// Split on blank lines and collapse internal whitespace.
fn split_blocks(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(current.join(" "));
                current.clear();
            }
            continue;
        }
        current.extend(line.split_whitespace());
    }
    if !current.is_empty() {
        blocks.push(current.join(" "));
    }
    blocks
}

#[cfg(test)]
#[path = "../../tests/unit/source/local.rs"]
mod tests;
