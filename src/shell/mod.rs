//! Interactive command shell
//!
//! Tokenizes typed commands and maps them onto controller calls. Every
//! command keeps the loop alive; bad input earns a hint, never an
//! abort.

use crate::player::{SelectionPrompt, VideoPlayer};
use anyhow::Result;
use std::io::{self, Write};

const GREETING: &str = "Hello and welcome to StreamTube, what would you like to do?\n\
                        Enter HELP for a list of available commands or EXIT to stop the app.";

const FAREWELL: &str = "StreamTube has now stopped. Goodbye!";

const UNKNOWN_COMMAND: &str =
    "Please enter a valid command, type HELP for a list of available commands.";

const HELP_TEXT: &str = "Available commands:
  NUMBER_OF_VIDEOS                      - Show how many videos are in the library
  SHOW_ALL_VIDEOS                       - List all videos in the library
  PLAY <video_id>                       - Play the specified video
  PLAY_RANDOM                           - Play a random unflagged video
  STOP                                  - Stop the current video
  PAUSE                                 - Pause the current video
  CONTINUE                              - Resume the current paused video
  SHOW_PLAYING                          - Show the video that is currently playing
  CREATE_PLAYLIST <playlist>            - Create a new (empty) playlist
  ADD_TO_PLAYLIST <playlist> <video_id> - Add a video to a playlist
  REMOVE_FROM_PLAYLIST <playlist> <video_id> - Remove a video from a playlist
  CLEAR_PLAYLIST <playlist>             - Remove all videos from a playlist
  DELETE_PLAYLIST <playlist>            - Delete a playlist
  SHOW_ALL_PLAYLISTS                    - List all playlists
  SHOW_PLAYLIST <playlist>              - List all videos in a playlist
  SEARCH_VIDEOS <term>                  - Search videos whose title contains the term
  SEARCH_VIDEOS_WITH_TAG <tag>          - Search videos carrying the tag (e.g. #cat)
  FLAG_VIDEO <video_id> [reason]        - Mark a video as inappropriate
  ALLOW_VIDEO <video_id>                - (not supported: flag state is permanent)
  HELP                                  - Show this help
  EXIT                                  - Stop the app";

/// A parsed user command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NumberOfVideos,
    ShowAllVideos,
    Play { video_id: String },
    PlayRandom,
    Stop,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist { name: String },
    AddToPlaylist { name: String, video_id: String },
    RemoveFromPlaylist { name: String, video_id: String },
    ClearPlaylist { name: String },
    DeletePlaylist { name: String },
    ShowAllPlaylists,
    ShowPlaylist { name: String },
    SearchVideos { term: String },
    SearchVideosWithTag { tag: String },
    FlagVideo { video_id: String, reason: Option<String> },
    AllowVideo { video_id: String },
    Help,
    Exit,
}

impl Command {
    /// Parse one non-empty input line. The command keyword is
    /// case-insensitive; arguments keep their case. Err carries the
    /// hint to show the user.
    pub fn parse(line: &str) -> Result<Command, String> {
        let mut tokens = line.split_whitespace();
        let keyword = tokens.next().unwrap_or_default().to_ascii_uppercase();
        let args: Vec<&str> = tokens.collect();

        let command = match keyword.as_str() {
            "NUMBER_OF_VIDEOS" => Command::NumberOfVideos,
            "SHOW_ALL_VIDEOS" => Command::ShowAllVideos,
            "PLAY" => Command::Play {
                video_id: required(&args, 0, "PLAY <video_id>")?,
            },
            "PLAY_RANDOM" => Command::PlayRandom,
            "STOP" => Command::Stop,
            "PAUSE" => Command::Pause,
            "CONTINUE" => Command::Continue,
            "SHOW_PLAYING" => Command::ShowPlaying,
            "CREATE_PLAYLIST" => Command::CreatePlaylist {
                name: required(&args, 0, "CREATE_PLAYLIST <playlist>")?,
            },
            "ADD_TO_PLAYLIST" => Command::AddToPlaylist {
                name: required(&args, 0, "ADD_TO_PLAYLIST <playlist> <video_id>")?,
                video_id: required(&args, 1, "ADD_TO_PLAYLIST <playlist> <video_id>")?,
            },
            "REMOVE_FROM_PLAYLIST" => Command::RemoveFromPlaylist {
                name: required(&args, 0, "REMOVE_FROM_PLAYLIST <playlist> <video_id>")?,
                video_id: required(&args, 1, "REMOVE_FROM_PLAYLIST <playlist> <video_id>")?,
            },
            "CLEAR_PLAYLIST" => Command::ClearPlaylist {
                name: required(&args, 0, "CLEAR_PLAYLIST <playlist>")?,
            },
            "DELETE_PLAYLIST" => Command::DeletePlaylist {
                name: required(&args, 0, "DELETE_PLAYLIST <playlist>")?,
            },
            "SHOW_ALL_PLAYLISTS" => Command::ShowAllPlaylists,
            "SHOW_PLAYLIST" => Command::ShowPlaylist {
                name: required(&args, 0, "SHOW_PLAYLIST <playlist>")?,
            },
            "SEARCH_VIDEOS" => Command::SearchVideos {
                term: required(&args, 0, "SEARCH_VIDEOS <term>")?,
            },
            "SEARCH_VIDEOS_WITH_TAG" => Command::SearchVideosWithTag {
                tag: required(&args, 0, "SEARCH_VIDEOS_WITH_TAG <tag>")?,
            },
            "FLAG_VIDEO" => Command::FlagVideo {
                video_id: required(&args, 0, "FLAG_VIDEO <video_id> [reason]")?,
                // everything after the id is the reason, so multi-word
                // reasons survive tokenization
                reason: (args.len() > 1).then(|| args[1..].join(" ")),
            },
            "ALLOW_VIDEO" => Command::AllowVideo {
                video_id: required(&args, 0, "ALLOW_VIDEO <video_id>")?,
            },
            "HELP" => Command::Help,
            "EXIT" => Command::Exit,
            _ => return Err(UNKNOWN_COMMAND.to_string()),
        };

        Ok(command)
    }
}

/// Fetch a required positional argument or build the usage hint
fn required(args: &[&str], index: usize, usage: &str) -> Result<String, String> {
    args.get(index)
        .map(|arg| arg.to_string())
        .ok_or_else(|| format!("Missing arguments. Usage: {}", usage))
}

/// Invoke the controller operation behind a parsed command.
///
/// HELP and EXIT never reach this point; the loop handles them.
fn dispatch<P, W>(player: &mut VideoPlayer<P, W>, command: Command) -> Result<()>
where
    P: SelectionPrompt,
    W: Write,
{
    match command {
        Command::NumberOfVideos => player.number_of_videos(),
        Command::ShowAllVideos => player.show_all_videos(),
        Command::Play { video_id } => player.play_video(&video_id),
        Command::PlayRandom => player.play_random_video(),
        Command::Stop => player.stop_video(),
        Command::Pause => player.pause_video(),
        Command::Continue => player.continue_video(),
        Command::ShowPlaying => player.show_playing(),
        Command::CreatePlaylist { name } => player.create_playlist(&name),
        Command::AddToPlaylist { name, video_id } => {
            player.add_video_to_playlist(&name, &video_id)
        }
        Command::RemoveFromPlaylist { name, video_id } => {
            player.remove_from_playlist(&name, &video_id)
        }
        Command::ClearPlaylist { name } => player.clear_playlist(&name),
        Command::DeletePlaylist { name } => player.delete_playlist(&name),
        Command::ShowAllPlaylists => player.show_all_playlists(),
        Command::ShowPlaylist { name } => player.show_playlist(&name),
        Command::SearchVideos { term } => player.search_videos(&term),
        Command::SearchVideosWithTag { tag } => player.search_videos_with_tag(&tag),
        Command::FlagVideo { video_id, reason } => {
            player.flag_video(&video_id, reason.as_deref())
        }
        Command::AllowVideo { .. } => {
            println!("ALLOW_VIDEO is not supported: flag state is permanent.");
            Ok(())
        }
        Command::Help | Command::Exit => Ok(()),
    }
}

/// Run the interactive shell until EXIT or end of input
pub fn run<P, W>(player: &mut VideoPlayer<P, W>) -> Result<()>
where
    P: SelectionPrompt,
    W: Write,
{
    println!("{}", GREETING);

    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break; // end of input
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        log::debug!("Command line: {}", input);

        match Command::parse(input) {
            Ok(Command::Exit) => break,
            Ok(Command::Help) => println!("{}", HELP_TEXT),
            Ok(command) => dispatch(player, command)?,
            Err(hint) => println!("{}", hint),
        }
    }

    println!("{}", FAREWELL);
    Ok(())
}
