use super::*;

/// An open comment section, with replies mocked locally by the reader.
#[derive(Clone, Debug)]
pub(crate) struct CommentThread {
  replies: HashMap<u64, Vec<String>>,
  pub(crate) root: CommentNode,
}

impl CommentThread {
  pub(crate) fn contains(&self, comment_id: u64) -> bool {
    comment_id != self.root.item.id && self.root.find(comment_id).is_some()
  }

  pub(crate) fn new(root: CommentNode) -> Self {
    Self {
      replies: HashMap::new(),
      root,
    }
  }

  pub(crate) fn replies_to(&self, comment_id: u64) -> &[String] {
    self
      .replies
      .get(&comment_id)
      .map(Vec::as_slice)
      .unwrap_or_default()
  }

  /// Appends a reply authored by the reader under `comment_id`. Nothing is
  /// sent upstream.
  pub(crate) fn reply(
    &mut self,
    comment_id: u64,
    text: &str,
  ) -> Result<(), ReplyError> {
    let text = text.trim();

    if text.is_empty() {
      return Err(ReplyError::Empty);
    }

    if !self.contains(comment_id) {
      return Err(ReplyError::UnknownComment { id: comment_id });
    }

    self
      .replies
      .entry(comment_id)
      .or_default()
      .push(text.to_string());

    Ok(())
  }

  pub(crate) fn story_id(&self) -> u64 {
    self.root.item.id
  }
}
