use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Role {
  Comment,
  Job,
  Poll,
  PollOption,
  Skip,
  Story,
}

/// Decides what an item is from which fields it carries. Rules are checked
/// in order, so a poll without `parts` falls through to the generic rules.
pub(crate) fn classify(item: &Item, feed: FeedKind) -> Role {
  let top_level = item.parent.is_none();

  if item.is_type(ItemType::Poll) && item.parts.is_some() {
    Role::Poll
  } else if item.is_type(ItemType::Job)
    || (top_level
      && feed == FeedKind::Jobs
      && (item.url.is_some() || item.text.is_some()))
  {
    Role::Job
  } else if top_level && item.title.is_some() {
    Role::Story
  } else if !top_level {
    Role::Comment
  } else if item.is_type(ItemType::Pollopt) {
    Role::PollOption
  } else {
    Role::Skip
  }
}
