use {
  anyhow::Context,
  app::App,
  async_trait::async_trait,
  card::Card,
  chrono::DateTime,
  classifier::{Role, classify},
  client::Client,
  command::Command,
  command_dispatch::CommandDispatch,
  comment::CommentNode,
  comment_thread::CommentThread,
  config::{Config, OutputFormat},
  crossterm::style::Stylize,
  cursor::{Advance, Cursor},
  effect::Effect,
  error::{ConfigError, GatewayError, ReplyError},
  event::Event,
  feed::FeedKind,
  futures::future::{self, BoxFuture, FutureExt, join_all},
  gateway::Gateway,
  html_escape::{encode_double_quoted_attribute, encode_text},
  item::{Item, ItemType},
  output::Output,
  poll::Poll,
  serde::{
    Deserialize, Deserializer,
    de::{self, Unexpected},
  },
  serde_json::Value,
  state::State,
  std::{
    backtrace::BacktraceStatus,
    collections::{HashMap, HashSet},
    env,
    io::{self, IsTerminal, Write},
    process,
    sync::Arc,
    time::Duration,
  },
  thiserror::Error,
  throttle::{Pacing, Sleep, Throttle},
  tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, BufReader},
    runtime::Handle,
    sync::mpsc::{self, UnboundedSender},
    time,
  },
  tracing_subscriber::EnvFilter,
  utils::{format_time, string_or_number},
};

#[cfg(test)]
use {fake_gateway::FakeGateway, throttle::RecordingThrottle};

mod app;
mod card;
mod classifier;
mod client;
mod command;
mod command_dispatch;
mod comment;
mod comment_thread;
mod config;
mod cursor;
mod effect;
mod error;
mod event;
#[cfg(test)]
mod fake_gateway;
mod feed;
mod gateway;
mod item;
mod output;
mod poll;
mod render;
mod state;
mod throttle;
mod utils;

const DEFAULT_API_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0";

const LOADING_COMMENTS_STATUS: &str = "Loading comments...";

const LOG_ENV: &str = "HN_CARDS_LOG";

const TEXT_WIDTH: usize = 80;

const HELP_TEXT: &str = "\
Commands:
  more, m                  load the next batch for the current feed
  feed, f <kind>           switch to stories, jobs or polls
  comments, c <id>         show or hide the comments of a story
  reply, r <id> <text>     add a local reply under a comment
  options, o <id>          show or hide the options of a poll
  refresh                  reload the page from the newest items
  reset                    start the current feed over
  help, ?                  show this help
  quit, q                  exit
";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_logging() {
  let filter = EnvFilter::try_from_env(LOG_ENV)
    .unwrap_or_else(|_| EnvFilter::new("warn"));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .with_target(false)
    .init();
}

async fn run() -> Result {
  initialize_logging();

  let config = Config::from_env().context("invalid configuration")?;

  tracing::debug!(?config, "configuration loaded");

  let client = Client::new(&config.api_base_url, config.timeout)?;

  let mut app = App::new(&config, Arc::new(client), Arc::new(Sleep));

  app.run().await
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
