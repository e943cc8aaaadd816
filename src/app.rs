use super::*;

pub(crate) struct App {
  format: OutputFormat,
  freshness_interval: Option<Duration>,
  gateway: Arc<dyn Gateway>,
  handle: Handle,
  in_flight: usize,
  state: State,
  throttle: Arc<dyn Throttle>,
}

impl App {
  fn execute_effect(
    &mut self,
    effect: Effect,
    sender: &UnboundedSender<Event>,
  ) {
    let (gateway, throttle, sender) = (
      Arc::clone(&self.gateway),
      Arc::clone(&self.throttle),
      sender.clone(),
    );

    self.in_flight += 1;

    self.handle.spawn(async move {
      let event = effect.perform(gateway.as_ref(), throttle.as_ref()).await;

      let _ = sender.send(event);
    });
  }

  fn execute_effects(
    &mut self,
    effects: Vec<Effect>,
    sender: &UnboundedSender<Event>,
  ) {
    for effect in effects {
      self.execute_effect(effect, sender);
    }
  }

  fn flush(
    &mut self,
    stdout: &mut impl Write,
    stderr: &mut impl Write,
  ) -> Result {
    for output in self.state.take_output() {
      match output {
        Output::Fragment(html) => match self.format {
          OutputFormat::Html => write!(stdout, "{html}")?,
          OutputFormat::Text => {
            writeln!(stdout, "{}\n", render::to_text(&html, TEXT_WIDTH))?;
          }
        },
        Output::Notice(message) => writeln!(stderr, "{message}")?,
      }
    }

    stdout.flush()?;

    Ok(())
  }

  pub(crate) fn new(
    config: &Config,
    gateway: Arc<dyn Gateway>,
    throttle: Arc<dyn Throttle>,
  ) -> Self {
    Self {
      format: config.format,
      freshness_interval: config.freshness_interval,
      gateway,
      handle: Handle::current(),
      in_flight: 0,
      state: State::new(config.pacing()),
      throttle,
    }
  }

  pub(crate) async fn run(&mut self) -> Result {
    self
      .session(
        BufReader::new(tokio::io::stdin()),
        &mut io::stdout(),
        &mut io::stderr(),
      )
      .await
  }

  /// Reads one command per line from `input` until `quit` or end of input.
  ///
  /// After end of input no more commands are read, but loads and comment
  /// fetches already started are awaited and rendered before returning.
  /// `quit` returns at once.
  async fn session(
    &mut self,
    input: impl AsyncBufRead + Unpin,
    stdout: &mut impl Write,
    stderr: &mut impl Write,
  ) -> Result {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    let mut lines = input.lines();

    let mut input_open = true;

    let mut freshness = self
      .freshness_interval
      .map(|period| time::interval_at(time::Instant::now() + period, period));

    let dispatch = self
      .state
      .dispatch_command(Command::Feed(self.state.active_feed()));

    self.execute_effects(dispatch.effects, &event_tx);

    loop {
      self.flush(stdout, stderr)?;

      if !input_open && self.in_flight == 0 {
        break;
      }

      tokio::select! {
        line = lines.next_line(), if input_open => {
          let Some(line) = line.context("could not read command")? else {
            tracing::debug!(pending = self.in_flight, "end of input");
            input_open = false;
            continue;
          };

          let dispatch = self.state.dispatch_command(Command::parse(&line));

          self.execute_effects(dispatch.effects, &event_tx);

          if dispatch.should_exit {
            break;
          }
        }
        Some(event) = event_rx.recv() => {
          self.in_flight = self.in_flight.saturating_sub(1);

          self.state.handle_event(event);

          let effects = self.state.take_effects();

          self.execute_effects(effects, &event_tx);
        }
        () = tick(freshness.as_mut()), if input_open => {
          self.state.check_freshness();

          let effects = self.state.take_effects();

          self.execute_effects(effects, &event_tx);
        }
      }
    }

    self.flush(stdout, stderr)
  }
}

async fn tick(interval: Option<&mut time::Interval>) {
  match interval {
    Some(interval) => {
      interval.tick().await;
    }
    None => future::pending().await,
  }
}
