//! Player controller
//!
//! `VideoPlayer` implements every user-facing command by combining the
//! catalog, the playlist store and the playback slot. Each command
//! writes its status lines to the output sink; failed preconditions
//! report a message and leave no side effects behind.

use crate::catalog::Catalog;
use crate::model::Video;
use crate::player::playlists::PlaylistStore;
use crate::player::prompt::SelectionPrompt;
use anyhow::Result;
use rand::seq::SliceRandom;
use std::io::Write;

/// Controller facade holding playback state and playlists
pub struct VideoPlayer<P: SelectionPrompt, W: Write> {
    catalog: Catalog,
    playlists: PlaylistStore,

    /// Id of the video in the playback slot
    now_playing: Option<String>,

    /// Meaningful only while a video is playing
    paused: bool,

    prompt: P,
    out: W,
}

impl<P: SelectionPrompt, W: Write> VideoPlayer<P, W> {
    /// Create a controller over a loaded catalog
    pub fn new(catalog: Catalog, prompt: P, out: W) -> Self {
        Self {
            catalog,
            playlists: PlaylistStore::new(),
            now_playing: None,
            paused: false,
            prompt,
            out,
        }
    }

    /// Id of the currently playing video, if any
    pub fn now_playing(&self) -> Option<&str> {
        self.now_playing.as_deref()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn playlists(&self) -> &PlaylistStore {
        &self.playlists
    }

    /// Consume the controller and return its output sink
    pub fn into_output(self) -> W {
        self.out
    }

    /// Video record behind the playback slot
    fn now_playing_video(&self) -> Option<&Video> {
        self.now_playing.as_deref().and_then(|id| self.catalog.get(id))
    }

    // --- Catalog listing ---

    pub fn number_of_videos(&mut self) -> Result<()> {
        writeln!(self.out, "{} videos in the library", self.catalog.len())?;
        Ok(())
    }

    /// List every video (flagged included), sorted by title
    pub fn show_all_videos(&mut self) -> Result<()> {
        writeln!(self.out, "Here's a list of all available videos:")?;

        let mut videos: Vec<&Video> = self.catalog.videos().iter().collect();
        videos.sort_by(|a, b| a.title.cmp(&b.title));

        for video in videos {
            writeln!(self.out, "{}", video)?;
        }
        Ok(())
    }

    // --- Playback ---

    pub fn play_video(&mut self, video_id: &str) -> Result<()> {
        let Some(video) = self.catalog.get(video_id) else {
            writeln!(self.out, "Cannot play video: Video does not exist")?;
            return Ok(());
        };

        if let Some(reason) = video.flagged_reason() {
            writeln!(
                self.out,
                "Cannot play video: Video is currently flagged (reason: {})",
                reason
            )?;
            return Ok(());
        }

        let title = video.title.clone();

        // Playing over an active video stops it first
        let stopping = self.now_playing_video().map(|v| v.title.clone());
        if let Some(old_title) = stopping {
            writeln!(self.out, "Stopping video: {}", old_title)?;
        }

        writeln!(self.out, "Playing video: {}", title)?;
        self.now_playing = Some(video_id.to_string());
        self.paused = false;
        Ok(())
    }

    pub fn stop_video(&mut self) -> Result<()> {
        let stopping = self.now_playing_video().map(|v| v.title.clone());

        match stopping {
            Some(title) => {
                writeln!(self.out, "Stopping video: {}", title)?;
                self.now_playing = None;
                self.paused = false;
            }
            None => {
                writeln!(self.out, "Cannot stop video: No video is currently playing")?;
            }
        }
        Ok(())
    }

    /// Play a uniformly random unflagged video
    pub fn play_random_video(&mut self) -> Result<()> {
        let pick = self
            .catalog
            .unflagged()
            .choose(&mut rand::thread_rng())
            .map(|v| v.video_id.clone());

        match pick {
            Some(video_id) => self.play_video(&video_id),
            None => {
                writeln!(self.out, "No videos available")?;
                Ok(())
            }
        }
    }

    pub fn pause_video(&mut self) -> Result<()> {
        let Some(title) = self.now_playing_video().map(|v| v.title.clone()) else {
            writeln!(self.out, "Cannot pause video: No video is currently playing")?;
            return Ok(());
        };

        if self.paused {
            writeln!(self.out, "Video already paused: {}", title)?;
        } else {
            writeln!(self.out, "Pausing video: {}", title)?;
            self.paused = true;
        }
        Ok(())
    }

    pub fn continue_video(&mut self) -> Result<()> {
        let Some(title) = self.now_playing_video().map(|v| v.title.clone()) else {
            writeln!(self.out, "Cannot continue video: No video is currently playing")?;
            return Ok(());
        };

        if !self.paused {
            writeln!(self.out, "Cannot continue video: Video is not paused")?;
        } else {
            writeln!(self.out, "Continuing video: {}", title)?;
            self.paused = false;
        }
        Ok(())
    }

    pub fn show_playing(&mut self) -> Result<()> {
        let line = match self.now_playing_video() {
            Some(video) => {
                let paused = if self.paused { " - PAUSED" } else { "" };
                format!("Currently playing: {}{}", video, paused)
            }
            None => "No video is currently playing".to_string(),
        };

        writeln!(self.out, "{}", line)?;
        Ok(())
    }

    // --- Playlists ---

    pub fn create_playlist(&mut self, name: &str) -> Result<()> {
        if self.playlists.create(name) {
            writeln!(self.out, "Successfully created new playlist: {}", name)?;
        } else {
            writeln!(
                self.out,
                "Cannot create playlist: A playlist with the same name already exists"
            )?;
        }
        Ok(())
    }

    pub fn add_video_to_playlist(&mut self, name: &str, video_id: &str) -> Result<()> {
        let Some(playlist) = self.playlists.get_mut(name) else {
            writeln!(self.out, "Cannot add video to {}: Playlist does not exist", name)?;
            return Ok(());
        };

        let Some(video) = self.catalog.get(video_id) else {
            writeln!(self.out, "Cannot add video to {}: Video does not exist", name)?;
            return Ok(());
        };

        if let Some(reason) = video.flagged_reason() {
            writeln!(
                self.out,
                "Cannot add video to {}: Video is currently flagged (reason: {})",
                name, reason
            )?;
            return Ok(());
        }

        if playlist.add_video(video.video_id.clone()) {
            writeln!(self.out, "Added video to {}: {}", name, video.title)?;
        } else {
            writeln!(self.out, "Cannot add video to {}: Video already added", name)?;
        }
        Ok(())
    }

    pub fn remove_from_playlist(&mut self, name: &str, video_id: &str) -> Result<()> {
        let Some(playlist) = self.playlists.get_mut(name) else {
            writeln!(
                self.out,
                "Cannot remove video from {}: Playlist does not exist",
                name
            )?;
            return Ok(());
        };

        let Some(video) = self.catalog.get(video_id) else {
            writeln!(self.out, "Cannot remove video from {}: Video does not exist", name)?;
            return Ok(());
        };

        if playlist.remove_video(video_id) {
            writeln!(self.out, "Removed video from {}: {}", name, video.title)?;
        } else {
            writeln!(
                self.out,
                "Cannot remove video from {}: Video is not in playlist",
                name
            )?;
        }
        Ok(())
    }

    pub fn clear_playlist(&mut self, name: &str) -> Result<()> {
        match self.playlists.get_mut(name) {
            Some(playlist) => {
                playlist.clear();
                writeln!(self.out, "Successfully removed all videos from {}", name)?;
            }
            None => {
                writeln!(
                    self.out,
                    "Cannot clear playlist {}: Playlist does not exist",
                    name
                )?;
            }
        }
        Ok(())
    }

    pub fn delete_playlist(&mut self, name: &str) -> Result<()> {
        if self.playlists.remove(name) {
            writeln!(self.out, "Deleted playlist: {}", name)?;
        } else {
            writeln!(
                self.out,
                "Cannot delete playlist {}: Playlist does not exist",
                name
            )?;
        }
        Ok(())
    }

    /// List playlist display names in creation order
    pub fn show_all_playlists(&mut self) -> Result<()> {
        if self.playlists.is_empty() {
            writeln!(self.out, "No playlists exist yet")?;
            return Ok(());
        }

        writeln!(self.out, "Showing all playlists:")?;
        for playlist in self.playlists.iter() {
            writeln!(self.out, "{}", playlist.name)?;
        }
        Ok(())
    }

    pub fn show_playlist(&mut self, name: &str) -> Result<()> {
        let Some(playlist) = self.playlists.get(name) else {
            writeln!(self.out, "Cannot show playlist {}: Playlist does not exist", name)?;
            return Ok(());
        };

        writeln!(self.out, "Showing playlist: {}", name)?;

        if playlist.is_empty() {
            writeln!(self.out, "No videos here yet")?;
            return Ok(());
        }

        for video_id in playlist.video_ids() {
            if let Some(video) = self.catalog.get(video_id) {
                writeln!(self.out, "{}", video)?;
            }
        }
        Ok(())
    }

    // --- Search ---

    /// Case-insensitive substring search on titles
    pub fn search_videos(&mut self, search_term: &str) -> Result<()> {
        let needle = search_term.to_lowercase();
        let results = self.matching_ids(|video| video.title.to_lowercase().contains(&needle));
        self.present_search_results(search_term, &results)
    }

    /// Exact case-insensitive tag match (tag including its '#' prefix)
    pub fn search_videos_with_tag(&mut self, video_tag: &str) -> Result<()> {
        let needle = video_tag.to_lowercase();
        let results = self.matching_ids(|video| {
            video.tags.iter().any(|tag| tag.to_lowercase() == needle)
        });
        self.present_search_results(video_tag, &results)
    }

    /// Ids of unflagged videos matching the predicate, sorted by title
    fn matching_ids<F>(&self, matches: F) -> Vec<String>
    where
        F: Fn(&Video) -> bool,
    {
        let mut results: Vec<&Video> = self
            .catalog
            .unflagged()
            .into_iter()
            .filter(|video| matches(video))
            .collect();

        results.sort_by(|a, b| a.title.cmp(&b.title));
        results.into_iter().map(|v| v.video_id.clone()).collect()
    }

    /// Show a numbered result list, then block on the selection prompt.
    /// Anything that is not a valid 1-based result number is a no.
    fn present_search_results(&mut self, search_term: &str, video_ids: &[String]) -> Result<()> {
        if video_ids.is_empty() {
            writeln!(self.out, "No search results for {}", search_term)?;
            return Ok(());
        }

        writeln!(self.out, "Here are the results for {}:", search_term)?;
        for (i, video_id) in video_ids.iter().enumerate() {
            if let Some(video) = self.catalog.get(video_id) {
                writeln!(self.out, "{}) {}", i + 1, video)?;
            }
        }
        writeln!(
            self.out,
            "Would you like to play any of the above? If yes, specify the number of the video."
        )?;
        writeln!(self.out, "If your answer is not a valid number, we will assume it's a no.")?;
        self.out.flush()?;

        let Some(reply) = self.prompt.read_line() else {
            return Ok(());
        };
        let Ok(selection) = reply.trim().parse::<usize>() else {
            return Ok(());
        };
        if selection == 0 || selection > video_ids.len() {
            return Ok(());
        }

        self.play_video(&video_ids[selection - 1])
    }

    // --- Flagging ---

    /// Flag a video, stopping it first when it is currently playing.
    /// A missing reason is recorded as "Not supplied".
    pub fn flag_video(&mut self, video_id: &str, reason: Option<&str>) -> Result<()> {
        let Some(video) = self.catalog.get(video_id) else {
            writeln!(self.out, "Cannot flag video: Video does not exist")?;
            return Ok(());
        };

        if video.is_flagged() {
            writeln!(self.out, "Cannot flag video: Video is already flagged")?;
            return Ok(());
        }

        let title = video.title.clone();
        let reason = reason.unwrap_or("Not supplied").to_string();

        if self.now_playing.as_deref() == Some(video_id) {
            self.stop_video()?;
        }

        self.catalog.flag(video_id, reason.clone());
        writeln!(self.out, "Successfully flagged video: {} (reason: {})", title, reason)?;
        Ok(())
    }
}
