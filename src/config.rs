use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum OutputFormat {
  Html,
  Text,
}

/// Session settings, read from `HN_CARDS_*` environment variables.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Config {
  pub(crate) api_base_url: String,
  pub(crate) batch_size: usize,
  pub(crate) delay: Duration,
  pub(crate) format: OutputFormat,
  pub(crate) freshness_interval: Option<Duration>,
  pub(crate) initial_batch_size: usize,
  pub(crate) initial_delay: Duration,
  pub(crate) timeout: Duration,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      api_base_url: DEFAULT_API_BASE_URL.to_string(),
      batch_size: 10,
      delay: Duration::from_millis(100),
      format: OutputFormat::Html,
      freshness_interval: Some(Duration::from_secs(5)),
      initial_batch_size: 10,
      initial_delay: Duration::from_millis(5),
      timeout: Duration::from_secs(10),
    }
  }
}

impl Config {
  pub(crate) fn from_env() -> Result<Self, ConfigError> {
    let default_format = if io::stdout().is_terminal() {
      OutputFormat::Text
    } else {
      OutputFormat::Html
    };

    Self::from_lookup(|name| env::var(name).ok(), default_format)
  }

  pub(crate) fn from_lookup(
    lookup: impl Fn(&str) -> Option<String>,
    default_format: OutputFormat,
  ) -> Result<Self, ConfigError> {
    let defaults = Self::default();

    let count = |name: &'static str, default: usize| match lookup(name) {
      Some(value) => value
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|count| *count > 0)
        .ok_or(ConfigError::Invalid {
          expected: "a positive integer",
          name,
          value,
        }),
      None => Ok(default),
    };

    let number = |name: &'static str| match lookup(name) {
      Some(value) => {
        value
          .trim()
          .parse::<u64>()
          .map(Some)
          .map_err(|_| ConfigError::Invalid {
            expected: "a non-negative integer",
            name,
            value,
          })
      }
      None => Ok(None),
    };

    let format = match lookup("HN_CARDS_FORMAT") {
      Some(value) => match value.trim().to_ascii_lowercase().as_str() {
        "html" => OutputFormat::Html,
        "text" => OutputFormat::Text,
        _ => {
          return Err(ConfigError::Invalid {
            expected: "`html` or `text`",
            name: "HN_CARDS_FORMAT",
            value,
          });
        }
      },
      None => default_format,
    };

    let freshness_interval = match number("HN_CARDS_FRESHNESS_SECS")? {
      Some(0) => None,
      Some(secs) => Some(Duration::from_secs(secs)),
      None => defaults.freshness_interval,
    };

    Ok(Self {
      api_base_url: lookup("HN_CARDS_API_BASE_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or(defaults.api_base_url),
      batch_size: count("HN_CARDS_BATCH_SIZE", defaults.batch_size)?,
      delay: number("HN_CARDS_DELAY_MS")?
        .map_or(defaults.delay, Duration::from_millis),
      format,
      freshness_interval,
      initial_batch_size: count(
        "HN_CARDS_INITIAL_BATCH_SIZE",
        defaults.initial_batch_size,
      )?,
      initial_delay: number("HN_CARDS_INITIAL_DELAY_MS")?
        .map_or(defaults.initial_delay, Duration::from_millis),
      timeout: number("HN_CARDS_TIMEOUT_SECS")?
        .map_or(defaults.timeout, Duration::from_secs),
    })
  }

  pub(crate) fn pacing(&self) -> Pacing {
    Pacing {
      batch_size: self.batch_size,
      delay: self.delay,
      initial_batch_size: self.initial_batch_size,
      initial_delay: self.initial_delay,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
    let vars = vars
      .iter()
      .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
      .collect::<HashMap<_, _>>();

    Config::from_lookup(|name| vars.get(name).cloned(), OutputFormat::Html)
  }

  #[test]
  fn defaults_apply_when_nothing_is_set() {
    assert_eq!(load(&[]).unwrap(), Config::default());
  }

  #[test]
  fn overrides_are_parsed() {
    let config = load(&[
      ("HN_CARDS_API_BASE_URL", "http://localhost:8080/v0/"),
      ("HN_CARDS_BATCH_SIZE", "3"),
      ("HN_CARDS_DELAY_MS", "0"),
      ("HN_CARDS_FORMAT", "TEXT"),
      ("HN_CARDS_FRESHNESS_SECS", "0"),
    ])
    .unwrap();

    assert_eq!(config.api_base_url, "http://localhost:8080/v0");
    assert_eq!(config.batch_size, 3);
    assert_eq!(config.delay, Duration::ZERO);
    assert_eq!(config.format, OutputFormat::Text);
    assert_eq!(config.freshness_interval, None);
    assert_eq!(config.initial_batch_size, 10);
  }

  #[test]
  fn zero_batch_size_is_rejected() {
    let error = load(&[("HN_CARDS_INITIAL_BATCH_SIZE", "0")]).unwrap_err();

    assert_eq!(
      error.to_string(),
      "HN_CARDS_INITIAL_BATCH_SIZE must be a positive integer, got `0`"
    );
  }

  #[test]
  fn unknown_format_is_rejected() {
    assert!(load(&[("HN_CARDS_FORMAT", "json")]).is_err());
  }

  #[test]
  fn pacing_mirrors_config() {
    let pacing = Config::default().pacing();

    assert_eq!(pacing.initial_delay, Duration::from_millis(5));
    assert_eq!(pacing.delay, Duration::from_millis(100));
    assert_eq!(pacing.batch_size, 10);
  }
}
