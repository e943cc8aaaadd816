use super::*;

/// Read access to the remote content store.
///
/// Implementations report every failure as a [`GatewayError`]. Callers that
/// only care whether an item exists go through [`Gateway::item`], which
/// collapses "not found" and "failed" into `None` and logs the difference.
#[async_trait]
pub(crate) trait Gateway: Send + Sync {
  async fn feed_ids(&self, feed: FeedKind) -> Result<Vec<u64>, GatewayError>;

  async fn fetch_item(&self, id: u64) -> Result<Option<Item>, GatewayError>;

  async fn frontier_id(&self) -> Result<u64, GatewayError>;

  async fn item(&self, id: u64) -> Option<Item> {
    match self.fetch_item(id).await {
      Ok(Some(item)) => Some(item),
      Ok(None) => {
        tracing::debug!(id, "item resolved to null");
        None
      }
      Err(error) => {
        tracing::warn!(id, %error, "skipping item");
        None
      }
    }
  }
}
