//! Catalog file parser
//!
//! Parses the pipe-separated catalog format, one video per line:
//!
//! ```text
//! Amazing Cats|amazing_cats_video_id|#cat, #animal
//! ```
//!
//! The tag field is optional; tags are comma-separated. Blank lines
//! are skipped and every field is trimmed.

use crate::model::Video;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Errors produced while reading a catalog file
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected `Title|video_id|tags`, found fewer than two fields")]
    MissingField { line: usize },

    #[error("line {line}: duplicate video id `{video_id}`")]
    DuplicateId { line: usize, video_id: String },
}

/// Parse a catalog file into video records
pub fn parse_catalog(path: &Path) -> Result<Vec<Video>, CatalogError> {
    let content = std::fs::read_to_string(path)?;
    let videos = parse_catalog_str(&content)?;

    log::info!("Parsed {} videos from catalog {:?}", videos.len(), path);
    Ok(videos)
}

/// Parse catalog lines from an in-memory string
fn parse_catalog_str(content: &str) -> Result<Vec<Video>, CatalogError> {
    let mut videos = Vec::new();
    let mut seen_ids = HashSet::new();

    for (index, raw_line) in content.lines().enumerate() {
        let line = index + 1;

        if raw_line.trim().is_empty() {
            continue;
        }

        let mut fields = raw_line.split('|');
        let title = fields.next().map(str::trim).filter(|f| !f.is_empty());
        let video_id = fields.next().map(str::trim).filter(|f| !f.is_empty());

        let (Some(title), Some(video_id)) = (title, video_id) else {
            return Err(CatalogError::MissingField { line });
        };

        if !seen_ids.insert(video_id.to_string()) {
            return Err(CatalogError::DuplicateId {
                line,
                video_id: video_id.to_string(),
            });
        }

        let tags = fields.next().map(parse_tags).unwrap_or_default();
        videos.push(Video::new(title.to_string(), video_id.to_string(), tags));
    }

    Ok(videos)
}

/// Split the comma-separated tag field, dropping empty segments
fn parse_tags(field: &str) -> Vec<String> {
    field
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}
