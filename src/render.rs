//! HTML fragments for cards and comment sections.
//!
//! Titles, authors, links and reader-written replies are escaped. Item `text`
//! is already HTML as served by the API and is embedded as is.

use super::*;

pub(crate) fn card(card: &Card, options_visible: bool) -> String {
  match card {
    Card::Job(item) => job(item),
    Card::Poll(poll) => self::poll(poll, options_visible),
    Card::Story(item) => story(item),
  }
}

fn comment(node: &CommentNode, thread: &CommentThread, html: &mut String) {
  let item = &node.item;

  let by = item.by.as_deref().unwrap_or("Anonymous");

  let body = match (item.is_deleted(), item.is_dead(), item.text.as_deref()) {
    (true, _, _) | (false, false, None) => "[Deleted]",
    (false, true, _) => "[dead]",
    (false, false, Some(text)) => text,
  };

  html.push_str(&format!("<div class=\"comment\" id=\"comment-{}\">\n", item.id));
  html.push_str(&format!(
    "<div class=\"comment-header\">{}</div>\n",
    encode_text(by)
  ));
  html.push_str(&format!("<div class=\"comment-body\">{body}</div>\n"));
  html.push_str(&format!(
    "<div class=\"comment-meta\">replied on {}</div>\n",
    format_time(item.time)
  ));

  let local = thread.replies_to(item.id);

  if !node.children.is_empty() || !local.is_empty() {
    html.push_str("<div class=\"replies\">\n");

    for child in &node.children {
      comment(child, thread, html);
    }

    for reply in local {
      html.push_str("<div class=\"comment local-reply\">\n");
      html.push_str("<div class=\"comment-header\">You</div>\n");
      html.push_str(&format!(
        "<div class=\"comment-body\">{}</div>\n",
        encode_text(reply)
      ));
      html.push_str("</div>\n");
    }

    html.push_str("</div>\n");
  }

  html.push_str("</div>\n");
}

pub(crate) fn comments(thread: &CommentThread) -> String {
  let mut html = format!(
    "<div class=\"comments\" id=\"comments-{}\">\n",
    thread.story_id()
  );

  if thread.root.is_leaf() {
    html.push_str("<p>No comments yet</p>\n");
  }

  for node in &thread.root.children {
    comment(node, thread, &mut html);
  }

  html.push_str("</div>\n");

  html
}

pub(crate) fn hidden_comments(item_id: u64) -> String {
  format!(
    "<div class=\"comments\" id=\"comments-{item_id}\" style=\"display: none;\"></div>\n"
  )
}

fn heading(item: &Item, href: &str, html: &mut String) {
  if let Some(title) = item.title.as_deref() {
    html.push_str(&format!(
      "<h2><a href=\"{}\" target=\"_blank\">{}</a></h2>\n",
      encode_double_quoted_attribute(href),
      encode_text(title)
    ));
  }
}

pub(crate) fn job(item: &Item) -> String {
  let href = link(item);

  let mut html = format!("<div class=\"card job\" id=\"item-{}\">\n", item.id);

  heading(item, &href, &mut html);

  html.push_str(&format!("<p>Posted on {}</p>\n", format_time(item.time)));

  if let Some(text) = item.text.as_deref() {
    html.push_str(&format!("<p>{text}</p>\n"));
  }

  html.push_str("</div>\n");

  html
}

fn link(item: &Item) -> String {
  item
    .url
    .clone()
    .filter(|url| !url.is_empty())
    .unwrap_or_else(|| item.permalink())
}

pub(crate) fn poll(poll: &Poll, options_visible: bool) -> String {
  let item = &poll.item;

  let mut html = format!("<div class=\"card poll\" id=\"item-{}\">\n", item.id);

  heading(item, &item.permalink(), &mut html);

  html.push_str(&format!(
    "<p>By {} on {}</p>\n",
    encode_text(item.by.as_deref().unwrap_or("unknown")),
    format_time(item.time)
  ));

  if let Some(score) = item.score {
    html.push_str(&format!("<p>Total votes: {score}</p>\n"));
  }

  html.push_str(if options_visible {
    "<div class=\"poll-options\">\n"
  } else {
    "<div class=\"poll-options\" style=\"display: none;\">\n"
  });

  if poll.options.is_empty() {
    html.push_str("<p>No options available</p>\n");
  }

  for option in &poll.options {
    html.push_str("<div class=\"poll-option\">\n");
    html.push_str(&format!(
      "<p>{}</p>\n",
      option.text.as_deref().unwrap_or("[Deleted]")
    ));
    html.push_str(&format!("<p>Votes: {}</p>\n", option.score.unwrap_or(0)));
    html.push_str("</div>\n");
  }

  html.push_str("</div>\n");

  html.push_str(&format!(
    "<button class=\"see-more\" data-item=\"{}\">{}</button>\n",
    item.id,
    if options_visible {
      "Hide options"
    } else {
      "See options"
    }
  ));

  html.push_str("</div>\n");

  html
}

pub(crate) fn story(item: &Item) -> String {
  let mut html = format!("<div class=\"card story\" id=\"item-{}\">\n", item.id);

  heading(item, &link(item), &mut html);

  html.push_str(&format!(
    "<p>Posted by @{} on {}</p>\n",
    encode_text(item.by.as_deref().unwrap_or("unknown")),
    format_time(item.time)
  ));

  if let Some(score) = item.score {
    html.push_str(&format!("<p>Score: {score}</p>\n"));
  }

  html.push_str(&format!(
    "<button class=\"show-comments\" data-item=\"{}\">Show Comments</button>\n",
    item.id
  ));

  html.push_str("</div>\n");

  html
}

/// Plain-text rendering of a fragment for terminals.
pub(crate) fn to_text(html: &str, width: usize) -> String {
  html2text::from_read(html.as_bytes(), width)
    .map(|text| text.trim_end().to_owned())
    .unwrap_or_else(|error| {
      tracing::warn!(%error, "could not convert fragment to text");
      html.to_string()
    })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn thread(children: Vec<CommentNode>) -> CommentThread {
    CommentThread::new(CommentNode {
      children,
      item: FakeGateway::story(1, "root"),
    })
  }

  fn leaf(item: Item) -> CommentNode {
    CommentNode {
      children: Vec::new(),
      item,
    }
  }

  #[test]
  fn story_card() {
    assert_eq!(
      story(&FakeGateway::story(7, "Rust & You")),
      "\
<div class=\"card story\" id=\"item-7\">
<h2><a href=\"https://example.com/7\" target=\"_blank\">Rust &amp; You</a></h2>
<p>Posted by @pg on 2023-11-14 22:13 UTC</p>
<p>Score: 42</p>
<button class=\"show-comments\" data-item=\"7\">Show Comments</button>
</div>
"
    );
  }

  #[test]
  fn story_card_without_optional_fields() {
    let item = Item {
      id: 8,
      ..Item::default()
    };

    assert_eq!(
      story(&item),
      "\
<div class=\"card story\" id=\"item-8\">
<p>Posted by @unknown on unknown time</p>
<button class=\"show-comments\" data-item=\"8\">Show Comments</button>
</div>
"
    );
  }

  #[test]
  fn job_card_links_to_permalink_without_url() {
    let mut item = FakeGateway::job(9, "Hiring");
    item.text = Some("<i>Remote</i>".to_string());

    assert_eq!(
      job(&item),
      "\
<div class=\"card job\" id=\"item-9\">
<h2><a href=\"https://news.ycombinator.com/item?id=9\" target=\"_blank\">Hiring</a></h2>
<p>Posted on 2023-11-14 22:13 UTC</p>
<p><i>Remote</i></p>
</div>
"
    );
  }

  #[test]
  fn poll_with_partial_options_shows_no_fallback() {
    let poll = Poll {
      item: FakeGateway::poll(1, "Best editor?", &[2, 3]),
      options: vec![FakeGateway::poll_option(2, 1, "vim")],
    };

    let html = super::poll(&poll, true);

    assert!(html.contains("<p>vim</p>\n<p>Votes: 3</p>"));
    assert!(!html.contains("No options available"));
    assert!(html.contains("Hide options"));
    assert!(!html.contains("display: none"));
  }

  #[test]
  fn poll_without_options_shows_fallback() {
    let poll = Poll {
      item: FakeGateway::poll(1, "Best editor?", &[]),
      options: Vec::new(),
    };

    assert_eq!(
      super::poll(&poll, false),
      "\
<div class=\"card poll\" id=\"item-1\">
<h2><a href=\"https://news.ycombinator.com/item?id=1\" target=\"_blank\">Best editor?</a></h2>
<p>By pollster on 2023-11-14 22:13 UTC</p>
<p>Total votes: 7</p>
<div class=\"poll-options\" style=\"display: none;\">
<p>No options available</p>
</div>
<button class=\"see-more\" data-item=\"1\">See options</button>
</div>
"
    );
  }

  #[test]
  fn empty_thread_says_no_comments() {
    assert_eq!(
      comments(&thread(Vec::new())),
      "<div class=\"comments\" id=\"comments-1\">\n<p>No comments yet</p>\n</div>\n"
    );
  }

  #[test]
  fn nested_comments_and_local_replies() {
    let mut deleted = FakeGateway::comment(3, 2, "gone");
    deleted.deleted = Some(true);

    let mut thread = thread(vec![CommentNode {
      children: vec![leaf(deleted)],
      item: FakeGateway::comment(2, 1, "<p>Hello</p>"),
    }]);

    thread.reply(2, "<b>me</b>").unwrap();

    assert_eq!(
      comments(&thread),
      "\
<div class=\"comments\" id=\"comments-1\">
<div class=\"comment\" id=\"comment-2\">
<div class=\"comment-header\">user2</div>
<div class=\"comment-body\"><p>Hello</p></div>
<div class=\"comment-meta\">replied on 2023-11-14 22:13 UTC</div>
<div class=\"replies\">
<div class=\"comment\" id=\"comment-3\">
<div class=\"comment-header\">user3</div>
<div class=\"comment-body\">[Deleted]</div>
<div class=\"comment-meta\">replied on 2023-11-14 22:13 UTC</div>
</div>
<div class=\"comment local-reply\">
<div class=\"comment-header\">You</div>
<div class=\"comment-body\">&lt;b&gt;me&lt;/b&gt;</div>
</div>
</div>
</div>
</div>
"
    );
  }

  #[test]
  fn anonymous_dead_comment() {
    let mut item = FakeGateway::comment(2, 1, "spam");
    item.by = None;
    item.dead = Some(true);

    let html = comments(&thread(vec![leaf(item)]));

    assert!(html.contains("<div class=\"comment-header\">Anonymous</div>"));
    assert!(html.contains("<div class=\"comment-body\">[dead]</div>"));
  }

  #[test]
  fn hidden_section_is_empty() {
    assert_eq!(
      hidden_comments(4),
      "<div class=\"comments\" id=\"comments-4\" style=\"display: none;\"></div>\n"
    );
  }

  #[test]
  fn card_dispatches_on_kind() {
    let item = FakeGateway::story(7, "x");

    assert_eq!(card(&Card::Story(item.clone()), false), story(&item));
  }

  #[test]
  fn text_rendering_strips_markup() {
    let text = to_text(&story(&FakeGateway::story(7, "Plain")), 80);

    assert!(text.contains("Plain"));
    assert!(!text.contains("<div"));
  }
}
