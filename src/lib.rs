//! StreamTube - command-driven video streaming simulator
//!
//! Maintains an in-memory catalog of videos, playback state (playing,
//! paused, stopped), user flagging of inappropriate videos and named
//! playlists, all driven through a line-based command shell.

pub mod catalog;
pub mod model;
pub mod player;
pub mod shell;

pub use catalog::{load_catalog, Catalog};
pub use player::VideoPlayer;
