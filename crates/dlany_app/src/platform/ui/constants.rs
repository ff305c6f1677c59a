use std::time::Duration;

pub const CMD_URL: &str = "url";
pub const CMD_SUBMIT: &str = "submit";
pub const CMD_VIDEO: &str = "video";
pub const CMD_AUDIO: &str = "audio";
pub const CMD_STATUS: &str = "status";
pub const CMD_HELP: &str = "help";
pub const CMD_QUIT: &str = "quit";
pub const CMD_EXIT: &str = "exit";

/// How long the loop waits for input before polling engine events.
pub const POLL_INTERVAL: Duration = Duration::from_millis(75);

pub const TITLE: &str = "dlany.";
pub const SUBTITLE: &str = "Universal Media Downloader";
pub const URL_PLACEHOLDER: &str = "https://youtube.com/watch?v=...";
