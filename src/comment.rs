use super::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct CommentNode {
  pub(crate) children: Vec<CommentNode>,
  pub(crate) item: Item,
}

impl CommentNode {
  pub(crate) fn find(&self, id: u64) -> Option<&CommentNode> {
    if self.item.id == id {
      return Some(self);
    }

    self.children.iter().find_map(|child| child.find(id))
  }

  pub(crate) fn is_leaf(&self) -> bool {
    self.children.is_empty()
  }

  /// Fetches `root_id` and every reply below it, fresh from the store.
  ///
  /// Siblings are fetched concurrently and kept in `kids` order. A reply
  /// that is missing, fails, or points back at itself or an ancestor is
  /// dropped together with its subtree.
  pub(crate) async fn materialize(
    gateway: &dyn Gateway,
    root_id: u64,
  ) -> Result<Self, GatewayError> {
    let item = gateway
      .fetch_item(root_id)
      .await?
      .ok_or(GatewayError::NotFound { id: root_id })?;

    let children =
      Self::children(gateway, root_id, item.kids().to_vec(), vec![root_id])
        .await;

    Ok(Self { children, item })
  }

  fn child(
    gateway: &dyn Gateway,
    parent_id: u64,
    id: u64,
    mut ancestors: Vec<u64>,
  ) -> BoxFuture<'_, Option<Self>> {
    async move {
      if ancestors.contains(&id) {
        tracing::warn!(id, parent = parent_id, "reply cycle, dropping branch");
        return None;
      }

      let item = gateway.item(id).await?;

      if let Err(error) = check_reply(parent_id, &item) {
        tracing::warn!(%error, "dropping reply branch");
        return None;
      }

      ancestors.push(id);

      let children =
        Self::children(gateway, id, item.kids().to_vec(), ancestors).await;

      Some(Self { children, item })
    }
    .boxed()
  }

  fn children(
    gateway: &dyn Gateway,
    parent_id: u64,
    kids: Vec<u64>,
    ancestors: Vec<u64>,
  ) -> BoxFuture<'_, Vec<Self>> {
    async move {
      join_all(
        kids
          .into_iter()
          .map(|id| Self::child(gateway, parent_id, id, ancestors.clone())),
      )
      .await
      .into_iter()
      .flatten()
      .collect()
    }
    .boxed()
  }
}

fn check_reply(parent_id: u64, item: &Item) -> Result<(), GatewayError> {
  match item.parent {
    Some(parent) if parent == item.id => {
      Err(GatewayError::malformed(item.id, "reply is its own parent"))
    }
    Some(parent) if parent != parent_id => Err(GatewayError::malformed(
      item.id,
      format!("listed under {parent_id} but parent is {parent}"),
    )),
    _ => Ok(()),
  }
}
