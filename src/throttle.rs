use super::*;

/// Batch sizes and the pause awaited after every fetch attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Pacing {
  pub(crate) batch_size: usize,
  pub(crate) delay: Duration,
  pub(crate) initial_batch_size: usize,
  pub(crate) initial_delay: Duration,
}

impl Pacing {
  pub(crate) fn delay(&self, first_batch: bool) -> Duration {
    if first_batch {
      self.initial_delay
    } else {
      self.delay
    }
  }

  pub(crate) fn target(&self, first_batch: bool) -> usize {
    if first_batch {
      self.initial_batch_size
    } else {
      self.batch_size
    }
  }
}

#[async_trait]
pub(crate) trait Throttle: Send + Sync {
  async fn pause(&self, delay: Duration);
}

pub(crate) struct Sleep;

#[async_trait]
impl Throttle for Sleep {
  async fn pause(&self, delay: Duration) {
    if !delay.is_zero() {
      tokio::time::sleep(delay).await;
    }
  }
}

#[cfg(test)]
#[derive(Default)]
pub(crate) struct RecordingThrottle {
  pauses: std::sync::Mutex<Vec<Duration>>,
}

#[cfg(test)]
impl RecordingThrottle {
  pub(crate) fn pauses(&self) -> Vec<Duration> {
    self.pauses.lock().unwrap().clone()
  }
}

#[cfg(test)]
#[async_trait]
impl Throttle for RecordingThrottle {
  async fn pause(&self, delay: Duration) {
    self.pauses.lock().unwrap().push(delay);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn pacing() -> Pacing {
    Pacing {
      batch_size: 4,
      delay: Duration::from_millis(100),
      initial_batch_size: 2,
      initial_delay: Duration::from_millis(5),
    }
  }

  #[test]
  fn first_batch_uses_initial_policy() {
    assert_eq!(pacing().target(true), 2);
    assert_eq!(pacing().delay(true), Duration::from_millis(5));
  }

  #[test]
  fn later_batches_use_subsequent_policy() {
    assert_eq!(pacing().target(false), 4);
    assert_eq!(pacing().delay(false), Duration::from_millis(100));
  }

  #[tokio::test]
  async fn sleep_skips_zero_delay() {
    Sleep.pause(Duration::ZERO).await;
  }
}
