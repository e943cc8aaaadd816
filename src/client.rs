use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  base_url: String,
  client: reqwest::Client,
}

impl Client {
  async fn get(&self, path: &str) -> Result<(String, Vec<u8>), GatewayError> {
    let url = self.url(path);

    let response = self
      .client
      .get(&url)
      .send()
      .await
      .and_then(reqwest::Response::error_for_status)
      .map_err(|error| GatewayError::transport(&url, error))?;

    let body = response
      .bytes()
      .await
      .map_err(|error| GatewayError::transport(&url, error))?;

    Ok((url, body.to_vec()))
  }

  pub(crate) fn new(base_url: &str, timeout: Duration) -> Result<Self> {
    let client = reqwest::Client::builder()
      .timeout(timeout)
      .user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
      ))
      .build()
      .context("could not build HTTP client")?;

    Ok(Self {
      base_url: base_url.trim_end_matches('/').to_string(),
      client,
    })
  }

  fn url(&self, path: &str) -> String {
    format!("{}/{path}.json", self.base_url)
  }
}

#[async_trait]
impl Gateway for Client {
  async fn feed_ids(&self, feed: FeedKind) -> Result<Vec<u64>, GatewayError> {
    let Some(endpoint) = feed.endpoint() else {
      return Ok(Vec::new());
    };

    let (url, body) = self.get(endpoint).await?;

    decode_ids(&url, &body)
  }

  async fn fetch_item(&self, id: u64) -> Result<Option<Item>, GatewayError> {
    let (_, body) = self.get(&format!("item/{id}")).await?;

    decode_item(id, &body)
  }

  async fn frontier_id(&self) -> Result<u64, GatewayError> {
    let (url, body) = self.get("maxitem").await?;

    serde_json::from_slice::<u64>(&body).map_err(|error| {
      GatewayError::Transport {
        message: format!("unexpected frontier payload: {error}"),
        url,
      }
    })
  }
}

fn decode_ids(url: &str, body: &[u8]) -> Result<Vec<u64>, GatewayError> {
  serde_json::from_slice::<Option<Vec<u64>>>(body)
    .map(Option::unwrap_or_default)
    .map_err(|error| GatewayError::Transport {
      message: format!("unexpected id list payload: {error}"),
      url: url.to_string(),
    })
}

fn decode_item(id: u64, body: &[u8]) -> Result<Option<Item>, GatewayError> {
  let item = serde_json::from_slice::<Option<Item>>(body)
    .map_err(|error| GatewayError::malformed(id, error.to_string()))?;

  match item {
    Some(item) if item.id != id => Err(GatewayError::malformed(
      id,
      format!("payload carries id {}", item.id),
    )),
    item => Ok(item),
  }
}
