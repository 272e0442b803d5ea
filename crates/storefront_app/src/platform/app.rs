use std::io::{self, IsTerminal, Write};
use std::sync::mpsc;

use anyhow::Context;
use chrono::Datelike;
use clap::Parser;
use storefront_core::{update, AppState, AppViewModel, Msg};
use storefront_logging::{sf_info, sf_warn};

use super::config::{self, Cli};
use super::effects::{EffectExecutor, EffectRunner};
use super::input::{self, UiEvent, COMMAND_HELP};
use super::{logging, ui};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

pub fn run_app() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::initialize(cli.log, cli.log_file.clone(), cli.verbose);

    let stored = config::load_settings(&cli.config).unwrap_or_else(|err| {
        sf_warn!("{}; using defaults", err);
        config::StoredSettings::default()
    });
    let settings = config::resolve_fetch_settings(&cli, stored);
    sf_info!("Storefront starting against {}", settings.base_url);

    let (event_tx, event_rx) = mpsc::channel::<UiEvent>();
    let runner = EffectRunner::new(settings, event_tx.clone())
        .context("failed to start the catalog engine")?;
    input::spawn_stdin_reader(event_tx);

    let stdout = io::stdout();
    let clear = stdout.is_terminal();
    let year = chrono::Local::now().year();
    let mut app = App::new(runner, stdout.lock(), year, clear);

    app.dispatch_msg(Msg::Activated)?;
    while let Ok(event) = event_rx.recv() {
        if !app.handle_event(event)? {
            break;
        }
    }
    sf_info!("Storefront closed");
    Ok(())
}

/// Owns the state; applies messages on the calling thread only.
struct App<E: EffectExecutor, W: Write> {
    state: AppState,
    executor: E,
    out: W,
    year: i32,
    clear_screen: bool,
    status: Option<String>,
}

impl<E: EffectExecutor, W: Write> App<E, W> {
    fn new(executor: E, out: W, year: i32, clear_screen: bool) -> Self {
        Self {
            state: AppState::new(),
            executor,
            out,
            year,
            clear_screen,
            status: Some(COMMAND_HELP.to_string()),
        }
    }

    /// Returns `false` once the loop should stop.
    fn handle_event(&mut self, event: UiEvent) -> io::Result<bool> {
        match event {
            UiEvent::Msg(msg) => {
                self.status = Some(COMMAND_HELP.to_string());
                self.dispatch_msg(msg)?;
                Ok(true)
            }
            UiEvent::Unrecognized(text) => {
                self.status = Some(format!("Unknown command: {text}. {COMMAND_HELP}"));
                let view = self.state.view();
                self.render(&view)?;
                Ok(true)
            }
            UiEvent::QuitRequested => {
                self.dispatch_msg(Msg::Deactivated)?;
                Ok(false)
            }
        }
    }

    fn dispatch_msg(&mut self, msg: Msg) -> io::Result<()> {
        let is_failure = matches!(msg, Msg::FeedFailed { .. });
        let feed_result = match &msg {
            Msg::FeedLoaded { request_id, .. } | Msg::FeedFailed { request_id, .. } => {
                Some(*request_id)
            }
            _ => None,
        };
        if let Some(request_id) = feed_result {
            if !self.state.accepts(request_id) {
                sf_info!(
                    "Discarding catalog result {} (current request {})",
                    request_id,
                    self.state.last_request_id()
                );
            }
        }

        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        if is_failure && was_dirty {
            if let (Some(request_id), Some(cause)) = (feed_result, state.last_failure()) {
                sf_warn!("Error fetching products (request {}): {}", request_id, cause);
            }
        }
        let view = state.view();
        self.state = state;

        // `Loading` is on screen before the request goes out.
        if was_dirty && view.active {
            self.render(&view)?;
        }
        self.executor.run(effects);
        Ok(())
    }

    fn render(&mut self, view: &AppViewModel) -> io::Result<()> {
        if self.clear_screen {
            self.out.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        let frame = ui::render::render_frame(view, self.status.as_deref(), self.year);
        self.out.write_all(frame.as_bytes())?;
        self.out.flush()
    }
}
