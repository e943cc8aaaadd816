use super::*;

#[derive(Default)]
struct FeedSlot {
  cards: Vec<Card>,
  /// `None` while a load for this feed is in flight.
  cursor: Option<Cursor>,
  started: bool,
}

pub(crate) struct State {
  active_feed: FeedKind,
  announced_frontier: Option<u64>,
  checking_freshness: bool,
  feeds: Vec<FeedSlot>,
  known_frontier: Option<u64>,
  next_request_id: u64,
  output: Vec<Output>,
  pacing: Pacing,
  pending_comments: HashMap<u64, u64>,
  pending_effects: Vec<Effect>,
  threads: HashMap<u64, CommentThread>,
  visible_options: HashSet<u64>,
}

impl State {
  pub(crate) fn active_feed(&self) -> FeedKind {
    self.active_feed
  }

  fn card(&self, id: u64) -> Option<&Card> {
    self
      .feeds
      .iter()
      .flat_map(|slot| slot.cards.iter())
      .find(|card| card.id() == id)
  }

  /// Queues a frontier re-read once the stories feed knows its frontier.
  pub(crate) fn check_freshness(&mut self) {
    if self.checking_freshness || self.known_frontier.is_none() {
      return;
    }

    self.checking_freshness = true;
    self.pending_effects.push(Effect::CheckFreshness);
  }

  pub(crate) fn dispatch_command(&mut self, command: Command) -> CommandDispatch {
    debug_assert!(
      self.pending_effects.is_empty(),
      "command dispatch should start without pending effects"
    );

    let mut should_exit = false;

    match command {
      Command::Feed(feed) => self.show_feed(feed),
      Command::Help => self.notice(HELP_TEXT),
      Command::Invalid(message) => self.notice(message),
      Command::LoadMore => self.load_more(self.active_feed),
      Command::None => {}
      Command::Quit => should_exit = true,
      Command::Refresh => self.refresh(),
      Command::Reply { comment_id, text } => self.reply(comment_id, &text),
      Command::Reset => self.reset(self.active_feed),
      Command::ToggleComments(id) => self.toggle_comments(id),
      Command::ToggleOptions(id) => self.toggle_options(id),
    }

    CommandDispatch {
      effects: self.take_effects(),
      should_exit,
    }
  }

  fn handle_batch(
    &mut self,
    cursor: Cursor,
    result: Result<Advance, GatewayError>,
  ) {
    let (feed, total) = (cursor.feed(), cursor.consumed());

    if let Some(frontier) = cursor.frontier() {
      self.known_frontier = Some(frontier);
    }

    self.slot_mut(feed).cursor = Some(cursor);

    match result {
      Ok(Advance::Batch(batch)) => {
        let count = batch.cards.len();

        for card in batch.cards {
          if feed == self.active_feed {
            let visible = self.visible_options.contains(&card.id());
            self.output.push(Output::Fragment(render::card(&card, visible)));
          }

          self.slot_mut(feed).cards.push(card);
        }

        if batch.complete {
          self.notice(format!("All {} loaded", feed.label()));
        } else {
          self.notice(format!(
            "Loaded {count} {} ({total} so far)",
            feed.label()
          ));
        }
      }
      Ok(Advance::NoMoreData) => {
        self.notice(format!("No more {} to load", feed.label()));
      }
      Err(error) => {
        self.notice(format!("Could not load {}: {error}", feed.label()));
      }
    }
  }

  pub(crate) fn handle_event(&mut self, event: Event) {
    match event {
      Event::Batch { cursor, result } => self.handle_batch(cursor, result),
      Event::Comments {
        item_id,
        request_id,
        result,
      } => {
        if self.pending_comments.get(&item_id) != Some(&request_id) {
          return;
        }

        self.pending_comments.remove(&item_id);

        match result {
          Ok(root) => {
            let thread = CommentThread::new(root);

            self.output.push(Output::Fragment(render::comments(&thread)));

            self.threads.insert(item_id, thread);
          }
          Err(error) => {
            self.notice(format!("Could not load comments: {error}"));
          }
        }
      }
      Event::Frontier { result } => {
        self.checking_freshness = false;

        match result {
          Ok(latest) => self.observe_frontier(latest),
          Err(error) => {
            tracing::debug!(%error, "freshness check failed");
          }
        }
      }
    }
  }

  fn load_more(&mut self, feed: FeedKind) {
    let slot = self.slot_mut(feed);

    slot.started = true;

    let Some(cursor) = slot.cursor.take() else {
      self.notice(format!("Already loading {}...", feed.label()));
      return;
    };

    if cursor.is_exhausted() {
      slot.cursor = Some(cursor);
      self.notice(format!("No more {} to load", feed.label()));
      return;
    }

    self.notice(format!("Loading {}...", feed.label()));

    self.pending_effects.push(Effect::LoadBatch { cursor });
  }

  pub(crate) fn new(pacing: Pacing) -> Self {
    let feeds = FeedKind::all()
      .iter()
      .map(|feed| FeedSlot {
        cursor: Some(Cursor::new(*feed, pacing)),
        ..FeedSlot::default()
      })
      .collect();

    Self {
      active_feed: FeedKind::Stories,
      announced_frontier: None,
      checking_freshness: false,
      feeds,
      known_frontier: None,
      next_request_id: 0,
      output: Vec::new(),
      pacing,
      pending_comments: HashMap::new(),
      pending_effects: Vec::new(),
      threads: HashMap::new(),
      visible_options: HashSet::new(),
    }
  }

  fn notice(&mut self, message: impl Into<String>) {
    self.output.push(Output::Notice(message.into()));
  }

  fn observe_frontier(&mut self, latest: u64) {
    let Some(known) = self.known_frontier else {
      return;
    };

    if latest <= known || self.announced_frontier == Some(latest) {
      return;
    }

    tracing::info!(known, latest, "new items available");

    self.announced_frontier = Some(latest);

    self.notice(format!(
      "{} new items since this page was loaded, `refresh` to reload",
      latest - known
    ));
  }

  fn refresh(&mut self) {
    if self.announced_frontier.is_none() {
      self.notice("Already up to date");
      return;
    }

    self.active_feed = FeedKind::Stories;
    self.reset(FeedKind::Stories);
  }

  fn reply(&mut self, comment_id: u64, text: &str) {
    let result = match self
      .threads
      .values_mut()
      .find(|thread| thread.contains(comment_id))
    {
      Some(thread) => thread
        .reply(comment_id, text)
        .map(|()| render::comments(thread)),
      None if text.trim().is_empty() => Err(ReplyError::Empty),
      None => Err(ReplyError::UnknownComment { id: comment_id }),
    };

    match result {
      Ok(html) => {
        self.output.push(Output::Fragment(html));
        self.notice(format!("Replied to comment {comment_id}"));
      }
      Err(error) => self.notice(error.to_string()),
    }
  }

  /// Starts the feed over with a fresh cursor. Refused while a load is in
  /// flight, since the in-flight cursor would come back and overwrite it.
  fn reset(&mut self, feed: FeedKind) {
    let pacing = self.pacing;

    let slot = self.slot_mut(feed);

    if slot.cursor.is_none() {
      self.notice(format!("Already loading {}...", feed.label()));
      return;
    }

    slot.cursor = Some(Cursor::new(feed, pacing));
    slot.cards.clear();

    if feed == FeedKind::Stories {
      self.known_frontier = None;
      self.announced_frontier = None;
    }

    self.load_more(feed);
  }

  fn show_feed(&mut self, feed: FeedKind) {
    self.active_feed = feed;

    self.notice(format!("Showing {}", feed.label()));

    let fragments = self
      .slot(feed)
      .cards
      .iter()
      .map(|card| {
        Output::Fragment(render::card(
          card,
          self.visible_options.contains(&card.id()),
        ))
      })
      .collect::<Vec<_>>();

    self.output.extend(fragments);

    if !self.slot(feed).started {
      self.load_more(feed);
    }
  }

  fn slot(&self, feed: FeedKind) -> &FeedSlot {
    &self.feeds[feed.index()]
  }

  fn slot_mut(&mut self, feed: FeedKind) -> &mut FeedSlot {
    &mut self.feeds[feed.index()]
  }

  pub(crate) fn take_effects(&mut self) -> Vec<Effect> {
    std::mem::take(&mut self.pending_effects)
  }

  pub(crate) fn take_output(&mut self) -> Vec<Output> {
    std::mem::take(&mut self.output)
  }

  fn toggle_comments(&mut self, item_id: u64) {
    if self.threads.remove(&item_id).is_some() {
      self
        .output
        .push(Output::Fragment(render::hidden_comments(item_id)));
      return;
    }

    if self.pending_comments.remove(&item_id).is_some() {
      self.notice(format!("Stopped loading comments for {item_id}"));
      return;
    }

    let request_id = self.next_request_id;

    self.next_request_id = self.next_request_id.wrapping_add(1);

    self.pending_comments.insert(item_id, request_id);

    self.notice(LOADING_COMMENTS_STATUS);

    self.pending_effects.push(Effect::FetchComments {
      item_id,
      request_id,
    });
  }

  fn toggle_options(&mut self, poll_id: u64) {
    if !matches!(self.card(poll_id), Some(Card::Poll(_))) {
      self.notice(format!("No poll {poll_id} on this page"));
      return;
    }

    let visible = if self.visible_options.remove(&poll_id) {
      false
    } else {
      self.visible_options.insert(poll_id);
      true
    };

    if let Some(html) = self.card(poll_id).map(|card| render::card(card, visible))
    {
      self.output.push(Output::Fragment(html));
    }
  }
}
