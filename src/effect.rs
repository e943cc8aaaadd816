use super::*;

#[derive(Debug)]
pub(crate) enum Effect {
  CheckFreshness,
  FetchComments { item_id: u64, request_id: u64 },
  LoadBatch { cursor: Cursor },
}

impl Effect {
  pub(crate) async fn perform(
    self,
    gateway: &dyn Gateway,
    throttle: &dyn Throttle,
  ) -> Event {
    match self {
      Self::CheckFreshness => Event::Frontier {
        result: gateway.frontier_id().await,
      },
      Self::FetchComments {
        item_id,
        request_id,
      } => Event::Comments {
        item_id,
        request_id,
        result: CommentNode::materialize(gateway, item_id).await,
      },
      Self::LoadBatch { mut cursor } => {
        let result = cursor.advance(gateway, throttle).await;

        Event::Batch { cursor, result }
      }
    }
  }
}
