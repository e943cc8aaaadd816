use super::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Candidates {
  /// Ids from the curated feed list, in list order.
  List(Vec<u64>),
  /// Every id from the frontier down to zero.
  Range { frontier: u64 },
}

impl Candidates {
  fn get(&self, position: usize) -> Option<u64> {
    match self {
      Self::List(ids) => ids.get(position).copied(),
      Self::Range { frontier } => u64::try_from(position)
        .ok()
        .and_then(|offset| frontier.checked_sub(offset)),
    }
  }
}

#[derive(Debug, PartialEq)]
pub(crate) enum Advance {
  Batch(Batch),
  NoMoreData,
}

#[derive(Debug, PartialEq)]
pub(crate) struct Batch {
  pub(crate) cards: Vec<Card>,
  /// The candidate space ran out during this batch.
  pub(crate) complete: bool,
}

/// Pagination state for one feed.
///
/// The cursor is moved into a load and handed back with its result, so a
/// feed can never have two loads advancing the same counters.
#[derive(Debug)]
pub(crate) struct Cursor {
  candidates: Option<Candidates>,
  consumed: usize,
  exhausted: bool,
  feed: FeedKind,
  first_batch: bool,
  pacing: Pacing,
  scanned: usize,
}

impl Cursor {
  /// Materializes the next batch of accepted items.
  ///
  /// Candidates are resolved one at a time, starting at position
  /// `consumed` (id `frontier - consumed` in range mode), with the pacing
  /// delay awaited after every fetch. Positions already resolved by an
  /// earlier batch are passed over without a second fetch.
  pub(crate) async fn advance(
    &mut self,
    gateway: &dyn Gateway,
    throttle: &dyn Throttle,
  ) -> Result<Advance, GatewayError> {
    if self.exhausted {
      return Ok(Advance::NoMoreData);
    }

    if self.candidates.is_none() {
      self.candidates = Some(self.load_candidates(gateway).await?);
    }

    let (target, delay) = (
      self.pacing.target(self.first_batch),
      self.pacing.delay(self.first_batch),
    );

    let mut position = self.consumed;

    if position < self.scanned {
      tracing::trace!(
        feed = self.feed.label(),
        from = position,
        to = self.scanned,
        "passing over candidates resolved by an earlier batch"
      );

      position = self.scanned;
    }

    let mut cards = Vec::new();

    while cards.len() < target {
      let Some(id) = self.candidate(position) else {
        break;
      };

      position += 1;
      self.scanned = position;

      if let Some(card) = Card::accept(gateway, self.feed, id).await {
        tracing::debug!(id, feed = self.feed.label(), "accepted");
        cards.push(card);
        self.consumed += 1;
      }

      throttle.pause(delay).await;
    }

    self.first_batch = false;

    if self.candidate(position).is_none() {
      self.exhausted = true;
    }

    tracing::info!(
      feed = self.feed.label(),
      accepted = cards.len(),
      consumed = self.consumed,
      exhausted = self.exhausted,
      "batch finished"
    );

    if cards.is_empty() && self.exhausted {
      return Ok(Advance::NoMoreData);
    }

    Ok(Advance::Batch(Batch {
      cards,
      complete: self.exhausted,
    }))
  }

  fn candidate(&self, position: usize) -> Option<u64> {
    self
      .candidates
      .as_ref()
      .and_then(|candidates| candidates.get(position))
  }

  pub(crate) fn consumed(&self) -> usize {
    self.consumed
  }

  pub(crate) fn feed(&self) -> FeedKind {
    self.feed
  }

  pub(crate) fn frontier(&self) -> Option<u64> {
    match self.candidates {
      Some(Candidates::Range { frontier }) => Some(frontier),
      _ => None,
    }
  }

  pub(crate) fn is_exhausted(&self) -> bool {
    self.exhausted
  }

  async fn load_candidates(
    &self,
    gateway: &dyn Gateway,
  ) -> Result<Candidates, GatewayError> {
    let candidates = if self.feed.endpoint().is_some() {
      Candidates::List(gateway.feed_ids(self.feed).await?)
    } else {
      Candidates::Range {
        frontier: gateway.frontier_id().await?,
      }
    };

    tracing::debug!(feed = self.feed.label(), ?candidates, "candidates loaded");

    Ok(candidates)
  }

  pub(crate) fn new(feed: FeedKind, pacing: Pacing) -> Self {
    Self {
      candidates: None,
      consumed: 0,
      exhausted: false,
      feed,
      first_batch: true,
      pacing,
      scanned: 0,
    }
  }
}
