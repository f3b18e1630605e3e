use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a single video in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    /// Video title as shown in listings
    pub title: String,

    /// Unique identifier, e.g. "amazing_cats_video_id"
    pub video_id: String,

    /// Tags including their '#' prefix, in catalog order
    pub tags: Vec<String>,

    /// Reason the video was flagged; None while unflagged
    flagged_reason: Option<String>,
}

impl Video {
    /// Create an unflagged video record
    pub fn new(title: String, video_id: String, tags: Vec<String>) -> Self {
        Self {
            title,
            video_id,
            tags,
            flagged_reason: None,
        }
    }

    pub fn is_flagged(&self) -> bool {
        self.flagged_reason.is_some()
    }

    pub fn flagged_reason(&self) -> Option<&str> {
        self.flagged_reason.as_deref()
    }

    /// Record the flag reason. The flag is permanent: once set it can
    /// never change, so a second call is ignored.
    pub(crate) fn set_flagged_reason(&mut self, reason: String) {
        if self.flagged_reason.is_none() {
            self.flagged_reason = Some(reason);
        }
    }
}

impl fmt::Display for Video {
    /// Renders as `Title (video_id) [#tag1 #tag2]`, with a FLAGGED
    /// annotation appended when a flag reason is set
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}]", self.title, self.video_id, self.tags.join(" "))?;

        if let Some(reason) = self.flagged_reason() {
            write!(f, " - FLAGGED (reason: {})", reason)?;
        }

        Ok(())
    }
}
