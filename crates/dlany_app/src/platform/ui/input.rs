use dlany_core::{Format, Msg};

use super::constants::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Apply(Vec<Msg>),
    Status,
    Help,
    Quit,
}

/// Maps one line typed by the user to messages for the core.
///
/// A line that is not a command is taken as a pasted link and submitted.
pub fn parse_line(line: &str) -> Command {
    let line = line.trim_end_matches(['\r', '\n']);
    let keyword = line.trim();

    if keyword.is_empty() || keyword == CMD_SUBMIT {
        return Command::Apply(vec![Msg::SubmitClicked]);
    }
    if keyword == CMD_URL {
        return Command::Apply(vec![Msg::UrlChanged(String::new())]);
    }
    // Everything after the separator is the url, untouched.
    if let Some(url) = line.trim_start().strip_prefix("url ") {
        return Command::Apply(vec![Msg::UrlChanged(url.to_string())]);
    }

    match keyword {
        CMD_VIDEO => Command::Apply(vec![Msg::FormatSelected(Format::Video)]),
        CMD_AUDIO => Command::Apply(vec![Msg::FormatSelected(Format::Audio)]),
        CMD_STATUS => Command::Status,
        CMD_HELP | "?" => Command::Help,
        CMD_QUIT | CMD_EXIT => Command::Quit,
        _ => Command::Apply(vec![Msg::UrlChanged(line.to_string()), Msg::SubmitClicked]),
    }
}

pub fn help_lines() -> Vec<String> {
    vec![
        format!("  {CMD_URL} <link>   set the link ({CMD_URL} alone clears it)"),
        format!("  {CMD_VIDEO} | {CMD_AUDIO}  pick the format"),
        format!("  {CMD_SUBMIT}       start the download (an empty line does the same)"),
        format!("  {CMD_STATUS}       show the form again"),
        format!("  {CMD_QUIT}         leave"),
        "  anything else is treated as a link and submitted".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keywords_map_to_messages() {
        assert_eq!(parse_line("submit"), Command::Apply(vec![Msg::SubmitClicked]));
        assert_eq!(parse_line(""), Command::Apply(vec![Msg::SubmitClicked]));
        assert_eq!(
            parse_line("audio\n"),
            Command::Apply(vec![Msg::FormatSelected(Format::Audio)])
        );
        assert_eq!(
            parse_line("video"),
            Command::Apply(vec![Msg::FormatSelected(Format::Video)])
        );
        assert_eq!(parse_line("status"), Command::Status);
        assert_eq!(parse_line("?"), Command::Help);
        assert_eq!(parse_line("exit"), Command::Quit);
    }

    #[test]
    fn url_command_keeps_the_value_verbatim() {
        assert_eq!(
            parse_line("url https://youtube.com/watch?v=abc "),
            Command::Apply(vec![Msg::UrlChanged(
                "https://youtube.com/watch?v=abc ".to_string()
            )])
        );
        assert_eq!(
            parse_line("url"),
            Command::Apply(vec![Msg::UrlChanged(String::new())])
        );
    }

    #[test]
    fn bare_link_is_set_and_submitted() {
        assert_eq!(
            parse_line("https://youtube.com/watch?v=abc"),
            Command::Apply(vec![
                Msg::UrlChanged("https://youtube.com/watch?v=abc".to_string()),
                Msg::SubmitClicked,
            ])
        );
    }
}
