#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Output {
  /// An HTML fragment for the page.
  Fragment(String),
  /// A status line for the reader.
  Notice(String),
}
