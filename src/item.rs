use super::*;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ItemType {
  Comment,
  Job,
  Poll,
  Pollopt,
  Story,
  #[serde(other)]
  Unknown,
}

/// One entry of the content store. Every field except `id` is optional
/// because the store is typed by convention, not by schema.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub(crate) struct Item {
  #[serde(default, deserialize_with = "string_or_number")]
  pub(crate) by: Option<String>,
  pub(crate) dead: Option<bool>,
  pub(crate) deleted: Option<bool>,
  pub(crate) id: u64,
  pub(crate) kids: Option<Vec<u64>>,
  pub(crate) parent: Option<u64>,
  pub(crate) parts: Option<Vec<u64>>,
  pub(crate) poll: Option<u64>,
  pub(crate) score: Option<i64>,
  pub(crate) text: Option<String>,
  pub(crate) time: Option<i64>,
  pub(crate) title: Option<String>,
  pub(crate) r#type: Option<ItemType>,
  pub(crate) url: Option<String>,
}

impl Item {
  pub(crate) fn is_dead(&self) -> bool {
    self.dead.unwrap_or(false)
  }

  pub(crate) fn is_deleted(&self) -> bool {
    self.deleted.unwrap_or(false)
  }

  pub(crate) fn is_type(&self, kind: ItemType) -> bool {
    self.r#type == Some(kind)
  }

  pub(crate) fn kids(&self) -> &[u64] {
    self.kids.as_deref().unwrap_or_default()
  }

  pub(crate) fn permalink(&self) -> String {
    format!("https://news.ycombinator.com/item?id={}", self.id)
  }
}
