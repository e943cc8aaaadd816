use {super::*, std::sync::Mutex};

/// In-memory content store that records every item request in order.
#[derive(Default)]
pub(crate) struct FakeGateway {
  failing: HashSet<u64>,
  feeds: HashMap<FeedKind, Vec<u64>>,
  frontier: Option<u64>,
  items: HashMap<u64, Item>,
  requested: Mutex<Vec<u64>>,
}

impl FakeGateway {
  pub(crate) fn comment(id: u64, parent: u64, text: &str) -> Item {
    Item {
      by: Some(format!("user{id}")),
      id,
      parent: Some(parent),
      text: Some(text.to_string()),
      time: Some(1_700_000_000),
      r#type: Some(ItemType::Comment),
      ..Item::default()
    }
  }

  pub(crate) fn failing(mut self, id: u64) -> Self {
    self.failing.insert(id);
    self
  }

  pub(crate) fn feed(mut self, feed: FeedKind, ids: &[u64]) -> Self {
    self.feeds.insert(feed, ids.to_vec());
    self
  }

  pub(crate) fn frontier(mut self, id: u64) -> Self {
    self.frontier = Some(id);
    self
  }

  pub(crate) fn job(id: u64, title: &str) -> Item {
    Item {
      by: Some("recruiter".to_string()),
      id,
      time: Some(1_700_000_000),
      title: Some(title.to_string()),
      r#type: Some(ItemType::Job),
      ..Item::default()
    }
  }

  pub(crate) fn poll(id: u64, title: &str, parts: &[u64]) -> Item {
    Item {
      by: Some("pollster".to_string()),
      id,
      parts: Some(parts.to_vec()),
      score: Some(7),
      time: Some(1_700_000_000),
      title: Some(title.to_string()),
      r#type: Some(ItemType::Poll),
      ..Item::default()
    }
  }

  pub(crate) fn poll_option(id: u64, poll: u64, text: &str) -> Item {
    Item {
      id,
      poll: Some(poll),
      score: Some(3),
      text: Some(text.to_string()),
      r#type: Some(ItemType::Pollopt),
      ..Item::default()
    }
  }

  pub(crate) fn requested(&self) -> Vec<u64> {
    self.requested.lock().unwrap().clone()
  }

  pub(crate) fn story(id: u64, title: &str) -> Item {
    Item {
      by: Some("pg".to_string()),
      id,
      score: Some(42),
      time: Some(1_700_000_000),
      title: Some(title.to_string()),
      r#type: Some(ItemType::Story),
      url: Some(format!("https://example.com/{id}")),
      ..Item::default()
    }
  }

  pub(crate) fn with(mut self, item: Item) -> Self {
    self.items.insert(item.id, item);
    self
  }
}

#[async_trait]
impl Gateway for FakeGateway {
  async fn feed_ids(&self, feed: FeedKind) -> Result<Vec<u64>, GatewayError> {
    self
      .feeds
      .get(&feed)
      .cloned()
      .ok_or_else(|| GatewayError::Transport {
        message: "HTTP status 503 Service Unavailable".to_string(),
        url: format!("fake://{}", feed.label()),
      })
  }

  async fn fetch_item(&self, id: u64) -> Result<Option<Item>, GatewayError> {
    self.requested.lock().unwrap().push(id);

    if self.failing.contains(&id) {
      return Err(GatewayError::Transport {
        message: "connection reset".to_string(),
        url: format!("fake://item/{id}"),
      });
    }

    Ok(self.items.get(&id).cloned())
  }

  async fn frontier_id(&self) -> Result<u64, GatewayError> {
    self.frontier.ok_or_else(|| GatewayError::Transport {
      message: "HTTP status 503 Service Unavailable".to_string(),
      url: "fake://maxitem".to_string(),
    })
  }
}
