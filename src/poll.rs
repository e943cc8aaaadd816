use super::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Poll {
  pub(crate) item: Item,
  pub(crate) options: Vec<Item>,
}

impl Poll {
  /// Resolves every id in `parts`, keeping the poll's order. Options that
  /// fail to resolve, or that are not options of this poll, are dropped.
  pub(crate) async fn resolve(gateway: &dyn Gateway, item: Item) -> Self {
    let poll_id = item.id;

    let options = join_all(
      item
        .parts
        .iter()
        .flatten()
        .map(|&id| resolve_option(gateway, poll_id, id)),
    )
    .await
    .into_iter()
    .flatten()
    .collect();

    Self { item, options }
  }
}

fn check_option(poll_id: u64, option: &Item) -> Result<(), GatewayError> {
  if !option.is_type(ItemType::Pollopt) {
    return Err(GatewayError::malformed(option.id, "not a poll option"));
  }

  match option.poll {
    Some(poll) if poll != poll_id => Err(GatewayError::malformed(
      option.id,
      format!("option of poll {poll}, listed by poll {poll_id}"),
    )),
    _ => Ok(()),
  }
}

async fn resolve_option(
  gateway: &dyn Gateway,
  poll_id: u64,
  id: u64,
) -> Option<Item> {
  let option = gateway.item(id).await?;

  match check_option(poll_id, &option) {
    Ok(()) => Some(option),
    Err(error) => {
      tracing::warn!(poll = poll_id, %error, "dropping poll option");
      None
    }
  }
}
