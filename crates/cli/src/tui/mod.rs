use std::time::Duration;

use crossterm::{
    event::{self, Event as CEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use crate::api::ApiClient;

mod controller;
mod draw;
mod events;
mod filter;
mod map;
mod repository;
mod state;

use controller::Screen;
use events::handle_event;
use state::{AppEvent, AppState};

pub struct TuiOptions {
    pub offline: bool,
    pub api_url: String,
}

pub async fn run_tui(opts: TuiOptions) -> anyhow::Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<AppEvent>();

    let api = if opts.offline {
        None
    } else {
        Some(ApiClient::new(opts.api_url.clone())?)
    };
    let mut app = AppState::new(tx.clone(), opts.offline, api);

    // first-ever Dashboard entry initializes the map adapter
    app.controller.navigate(Screen::Dashboard);
    if opts.offline {
        app.repo.load(common::fixture::assets())?;
        app.map.render(app.repo.all());
        let n = app.repo.len();
        app.notify(format!("{n} assets loaded from the built-in dataset"));
    } else if let Some(client) = app.api.clone() {
        app.loading = true;
        let tx_load = tx.clone();
        tokio::spawn(async move {
            let _ = tx_load.send(AppEvent::DataLoaded(client.load_assets().await));
        });
    }

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Tick task
    let tx_tick = tx.clone();
    tokio::spawn(async move {
        let mut intv = tokio::time::interval(Duration::from_millis(250));
        loop {
            intv.tick().await;
            let _ = tx_tick.send(AppEvent::Tick);
        }
    });

    // Keyboard task (blocking crossterm)
    let tx_key = tx.clone();
    tokio::task::spawn_blocking(move || loop {
        if event::poll(Duration::from_millis(50)).unwrap_or(false) {
            if let Ok(CEvent::Key(key)) = event::read() {
                let _ = tx_key.send(AppEvent::Key(key));
            }
        }
    });

    let res = run_loop(&mut terminal, &mut app, &mut rx).await;

    // Restore terminal
    disable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    res
}

/// One cooperative loop owns all state: each event runs to completion before
/// the next is taken, then the screen is redrawn.
async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut AppState,
    rx: &mut mpsc::UnboundedReceiver<AppEvent>,
) -> anyhow::Result<()> {
    loop {
        let Some(evt) = rx.recv().await else {
            return Ok(());
        };
        let mut quit = handle_event(app, evt).await?;
        while let Ok(evt) = rx.try_recv() {
            if handle_event(app, evt).await? {
                quit = true;
            }
        }
        if quit {
            return Ok(());
        }
        terminal.draw(|f| draw::draw(f, app))?;
    }
}
