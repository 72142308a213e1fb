//! Terminal setup and the event loop.

use crate::app::{App, Deferred};
use crate::config::TuiConfig;
use crate::ui;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

/// How long one loop iteration waits for a key.
const INPUT_POLL: Duration = Duration::from_millis(50);

/// Runs the game until the user quits.
pub async fn run(config: TuiConfig) -> Result<()> {
    info!("Starting noughts TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &config).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

#[instrument(skip_all)]
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &TuiConfig,
) -> Result<()> {
    let mut app = App::new(config.setup_request());
    let (deferred_tx, mut deferred_rx) = mpsc::unbounded_channel();

    if let Some(work) = app.startup() {
        schedule(work, config, &deferred_tx);
    }

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        while let Ok(work) = deferred_rx.try_recv() {
            if let Some(next) = app.handle_deferred(work) {
                schedule(next, config, &deferred_tx);
            }
        }

        if event::poll(INPUT_POLL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(next) = app.handle_key(key.code) {
                    schedule(next, config, &deferred_tx);
                }
            }
        }

        if app.should_quit() {
            info!(rounds = app.round().rounds_played(), "User quit");
            return Ok(());
        }

        // Input polling blocks this task; let timers run on a single-worker runtime.
        tokio::task::yield_now().await;
    }
}

/// Fires `work` back into the loop after its delay. One-shot, never cancelled.
fn schedule(work: Deferred, config: &TuiConfig, tx: &mpsc::UnboundedSender<Deferred>) {
    let delay = match work {
        Deferred::Reset(_) => config.cooldown(),
        Deferred::ComputerMove => config.think_delay(),
    };
    debug!(?work, ?delay, "Scheduling deferred work");

    let tx = tx.clone();
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        // The loop has exited if the receiver is gone.
        let _ = tx.send(work);
    });
}
