use super::*;

pub(crate) enum Event {
  Batch {
    cursor: Cursor,
    result: Result<Advance, GatewayError>,
  },
  Comments {
    item_id: u64,
    request_id: u64,
    result: Result<CommentNode, GatewayError>,
  },
  Frontier {
    result: Result<u64, GatewayError>,
  },
}
