use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command {
  Feed(FeedKind),
  Help,
  Invalid(String),
  LoadMore,
  None,
  Quit,
  Refresh,
  Reply { comment_id: u64, text: String },
  Reset,
  ToggleComments(u64),
  ToggleOptions(u64),
}

impl Command {
  pub(crate) fn parse(line: &str) -> Self {
    let line = line.trim();

    let (name, rest) = line
      .split_once(char::is_whitespace)
      .map_or((line, ""), |(name, rest)| (name, rest.trim()));

    let id = |rest: &str| rest.parse::<u64>().ok();

    match name.to_ascii_lowercase().as_str() {
      "" => Self::None,
      "comments" | "c" => id(rest).map_or_else(
        || Self::Invalid("usage: comments <id>".into()),
        Self::ToggleComments,
      ),
      "feed" | "f" => FeedKind::parse(rest).map_or_else(
        || Self::Invalid("usage: feed stories|jobs|polls".into()),
        Self::Feed,
      ),
      "help" | "?" => Self::Help,
      "more" | "m" => Self::LoadMore,
      "options" | "o" => id(rest).map_or_else(
        || Self::Invalid("usage: options <poll id>".into()),
        Self::ToggleOptions,
      ),
      "quit" | "q" | "exit" => Self::Quit,
      "refresh" => Self::Refresh,
      "reply" | "r" => {
        let (target, text) = rest
          .split_once(char::is_whitespace)
          .map_or((rest, ""), |(target, text)| (target, text.trim()));

        id(target).map_or_else(
          || Self::Invalid("usage: reply <comment id> <text>".into()),
          |comment_id| Self::Reply {
            comment_id,
            text: text.to_string(),
          },
        )
      }
      "reset" => Self::Reset,
      other => Self::Invalid(format!("unknown command `{other}`, try `help`")),
    }
  }
}
