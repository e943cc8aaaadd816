use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum FeedKind {
  Jobs,
  Polls,
  Stories,
}

impl FeedKind {
  pub(crate) fn accepts(self, role: Role) -> bool {
    matches!(
      (self, role),
      (Self::Jobs, Role::Job)
        | (Self::Polls, Role::Poll)
        | (Self::Stories, Role::Story)
    )
  }

  pub(crate) fn all() -> &'static [FeedKind] {
    &[Self::Stories, Self::Jobs, Self::Polls]
  }

  /// Endpoint of the curated id list, or `None` for feeds that page through
  /// every id below the frontier.
  pub(crate) fn endpoint(self) -> Option<&'static str> {
    match self {
      Self::Jobs => Some("jobstories"),
      Self::Polls => Some("topstories"),
      Self::Stories => None,
    }
  }

  pub(crate) fn index(self) -> usize {
    match self {
      Self::Stories => 0,
      Self::Jobs => 1,
      Self::Polls => 2,
    }
  }

  pub(crate) fn label(self) -> &'static str {
    match self {
      Self::Jobs => "jobs",
      Self::Polls => "polls",
      Self::Stories => "stories",
    }
  }

  pub(crate) fn parse(name: &str) -> Option<Self> {
    Self::all()
      .iter()
      .copied()
      .find(|feed| feed.label().eq_ignore_ascii_case(name))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn each_feed_accepts_only_its_role() {
    assert!(FeedKind::Stories.accepts(Role::Story));
    assert!(!FeedKind::Stories.accepts(Role::Comment));
    assert!(!FeedKind::Stories.accepts(Role::Job));
    assert!(FeedKind::Jobs.accepts(Role::Job));
    assert!(FeedKind::Polls.accepts(Role::Poll));
    assert!(!FeedKind::Polls.accepts(Role::PollOption));
  }

  #[test]
  fn list_feeds_have_endpoints() {
    assert_eq!(FeedKind::Stories.endpoint(), None);
    assert_eq!(FeedKind::Jobs.endpoint(), Some("jobstories"));
    assert_eq!(FeedKind::Polls.endpoint(), Some("topstories"));
  }

  #[test]
  fn parse_matches_labels() {
    assert_eq!(FeedKind::parse("Jobs"), Some(FeedKind::Jobs));
    assert_eq!(FeedKind::parse("ask"), None);

    for (index, feed) in FeedKind::all().iter().enumerate() {
      assert_eq!(feed.index(), index);
    }
  }
}
