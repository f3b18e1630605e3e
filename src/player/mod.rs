//! Playback state and command handling
//!
//! The controller facade lives here, together with the playlist store
//! and the injectable selection-prompt capability it depends on.

mod controller;
mod playlists;
mod prompt;

pub use controller::VideoPlayer;
pub use playlists::PlaylistStore;
pub use prompt::{ScriptedPrompt, SelectionPrompt, StdinPrompt};
