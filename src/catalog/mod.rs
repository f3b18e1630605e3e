//! In-memory video catalog
//!
//! The catalog is loaded once at startup and never changes shape
//! afterwards; the only mutation is recording a flag reason on a
//! video.

mod loader;

pub use loader::{parse_catalog, CatalogError};

use crate::model::Video;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

/// Fixed set of videos with id lookup
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Arena of video records, in catalog-file order
    videos: Vec<Video>,

    /// video_id -> index into `videos`
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from already-parsed records.
    ///
    /// Ids are assumed unique; the loader rejects duplicates before a
    /// catalog is ever built from file input.
    pub fn new(videos: Vec<Video>) -> Self {
        let index = videos
            .iter()
            .enumerate()
            .map(|(i, video)| (video.video_id.clone(), i))
            .collect();

        Self { videos, index }
    }

    /// Exact-id lookup
    pub fn get(&self, video_id: &str) -> Option<&Video> {
        self.index.get(video_id).map(|&i| &self.videos[i])
    }

    /// All videos, in catalog order
    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    /// Videos without a flag reason set
    pub fn unflagged(&self) -> Vec<&Video> {
        self.videos.iter().filter(|v| !v.is_flagged()).collect()
    }

    /// Total number of videos
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    /// Record a flag reason on a video. Unknown ids are a no-op;
    /// callers validate existence first.
    pub(crate) fn flag(&mut self, video_id: &str, reason: String) {
        if let Some(&i) = self.index.get(video_id) {
            self.videos[i].set_flagged_reason(reason);
        }
    }
}

/// Load a catalog from a pipe-separated text file
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let videos = parse_catalog(path)
        .with_context(|| format!("Failed to load video catalog: {:?}", path))?;

    Ok(Catalog::new(videos))
}
