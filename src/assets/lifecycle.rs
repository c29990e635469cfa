use std::path::{Path, PathBuf};

use crate::composition::model::ImageAsset;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Outcome of a single [`AssetScope::cleanup_all`] call.
pub struct CleanupReport {
    /// Files that were deleted.
    pub removed: Vec<PathBuf>,
    /// Files that could not be deleted, with the reason.
    pub failed: Vec<(PathBuf, String)>,
}

impl CleanupReport {
    /// True when the call had nothing to do.
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.failed.is_empty()
    }
}

/// Owns the backing files of the images materialized for one run.
///
/// Every tracked file is removed exactly once, either by an explicit
/// [`AssetScope::cleanup_all`] or when the scope is dropped. Removal failures are logged and
/// never stop the remaining files from being removed.
#[derive(Debug, Default)]
pub struct AssetScope {
    tracked: Vec<PathBuf>,
}

impl AssetScope {
    /// Empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the backing file of `asset`. Tracking the same path twice is a no-op.
    pub fn track(&mut self, asset: &ImageAsset) {
        self.track_path(&asset.local_path);
    }

    /// Register an arbitrary transient file.
    pub fn track_path(&mut self, path: &Path) {
        if !self.tracked.iter().any(|p| p == path) {
            self.tracked.push(path.to_path_buf());
        }
    }

    /// Paths still awaiting cleanup, in registration order.
    pub fn tracked(&self) -> &[PathBuf] {
        &self.tracked
    }

    /// Remove every tracked file. Calling this again removes nothing.
    pub fn cleanup_all(&mut self) -> CleanupReport {
        let mut report = CleanupReport::default();
        for path in self.tracked.drain(..) {
            match std::fs::remove_file(&path) {
                Ok(()) => {
                    tracing::debug!(path = %path.display(), "deleted asset");
                    report.removed.push(path);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "failed to delete asset");
                    report.failed.push((path, err.to_string()));
                }
            }
        }
        report
    }
}

impl Drop for AssetScope {
    fn drop(&mut self) {
        if !self.tracked.is_empty() {
            self.cleanup_all();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/lifecycle.rs"]
mod tests;
