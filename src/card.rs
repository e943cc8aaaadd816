use super::*;

/// An item accepted into a feed.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Card {
  Job(Item),
  Poll(Poll),
  Story(Item),
}

impl Card {
  /// Fetches `id` and keeps it only if it plays the role `feed` wants.
  pub(crate) async fn accept(
    gateway: &dyn Gateway,
    feed: FeedKind,
    id: u64,
  ) -> Option<Self> {
    let item = gateway.item(id).await?;

    let role = classify(&item, feed);

    if !feed.accepts(role) {
      tracing::trace!(id, ?role, feed = feed.label(), "candidate rejected");
      return None;
    }

    match role {
      Role::Job => Some(Self::Job(item)),
      Role::Poll => Some(Self::Poll(Poll::resolve(gateway, item).await)),
      Role::Story => Some(Self::Story(item)),
      Role::Comment | Role::PollOption | Role::Skip => None,
    }
  }

  pub(crate) fn id(&self) -> u64 {
    self.item().id
  }

  pub(crate) fn item(&self) -> &Item {
    match self {
      Self::Job(item) | Self::Story(item) => item,
      Self::Poll(poll) => &poll.item,
    }
  }
}
