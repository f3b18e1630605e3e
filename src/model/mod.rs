//! Data model for videos and playlists
//!
//! Plain records, independent of how commands are parsed or how
//! results are rendered.

mod playlist;
mod video;

pub use playlist::Playlist;
pub use video::Video;
