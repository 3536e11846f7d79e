// src/main.rs

use color_eyre::eyre::Result;
use crossterm::{
    event::{
        self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use std::io::stdout;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{info, warn};

mod app;
mod config;
mod core;
mod logging;
mod ui;

use app::App;
use crate::core::client::gemini::GeminiClient;
use crate::core::client::{AnalysisClient, ClientResult};
use crate::core::models::AnalysisResult;
use crate::core::workflow::View;

type Outcome = ClientResult<AnalysisResult>;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    logging::initialize_logging()?;

    // Configuration problems are reported before the terminal is taken over.
    let settings = config::Settings::from_env()?;
    info!(model = %settings.model, "Starting originality checker.");
    let client: Arc<dyn AnalysisClient> = Arc::new(GeminiClient::new(settings)?);

    // --- Setup ---
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableBracketedPaste)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let result = run(&mut terminal, client).await;

    // --- Restore Terminal ---
    stdout().execute(DisableBracketedPaste)?;
    stdout().execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;
    info!("Originality checker closed.");
    result
}

async fn run<B: Backend>(terminal: &mut Terminal<B>, client: Arc<dyn AnalysisClient>) -> Result<()> {
    let mut app = App::new(logging::get_reports_dir());
    let (tx, mut rx) = mpsc::channel::<Outcome>(1);

    while !app.should_quit {
        terminal.draw(|frame| ui::render(&mut app, frame))?;

        if event::poll(Duration::from_millis(100))? {
            handle_events(&mut app, &tx, &client)?;
        }

        if let Ok(outcome) = rx.try_recv() {
            app.finish_analysis(outcome);
        }

        app.on_tick();
    }
    Ok(())
}

fn handle_events(app: &mut App, tx: &mpsc::Sender<Outcome>, client: &Arc<dyn AnalysisClient>) -> Result<()> {
    handle_event(app, event::read()?, tx, client);
    Ok(())
}

/// Applies one terminal event. Any key press while a notice is showing only dismisses it.
fn handle_event(app: &mut App, event: Event, tx: &mpsc::Sender<Outcome>, client: &Arc<dyn AnalysisClient>) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if app.workflow.notice().is_some() {
                app.workflow.dismiss_notice();
                return;
            }
            if is_quit(&key) {
                app.quit();
                return;
            }
            match app.workflow.view() {
                View::Input => handle_input_keys(app, key, tx, client),
                View::Results => handle_results_keys(app, key.code),
            }
        }
        Event::Paste(text) => {
            if matches!(app.workflow.view(), View::Input) && app.workflow.notice().is_none() {
                app.workflow.insert_str(&text.replace("\r\n", "\n").replace('\r', "\n"));
            }
        }
        _ => {}
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Input tab: editing and submission. Keys other than quit are ignored while analyzing.
fn handle_input_keys(app: &mut App, key: KeyEvent, tx: &mpsc::Sender<Outcome>, client: &Arc<dyn AnalysisClient>) {
    if app.workflow.in_flight() {
        return;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => app.workflow.insert_char('\n'),
        KeyCode::Enter => dispatch(app, tx, client),
        KeyCode::Char('l') if ctrl => app.workflow.clear_text(),
        KeyCode::Char(c) if !ctrl => app.workflow.insert_char(c),
        KeyCode::Backspace => app.workflow.delete_char(),
        KeyCode::Tab | KeyCode::Right => app.show(View::Results),
        _ => {}
    }
}

/// Starts the analysis on a background task and reports back over `tx`.
fn dispatch(app: &mut App, tx: &mpsc::Sender<Outcome>, client: &Arc<dyn AnalysisClient>) {
    let Some(request) = app.submit() else {
        return;
    };
    let tx_clone = tx.clone();
    let client = Arc::clone(client);

    tokio::spawn(async move {
        let outcome = client.analyze(&request.text).await;
        if tx_clone.send(outcome).await.is_err() {
            warn!("Analysis finished after the UI closed.");
        }
    });
}

/// Results tab: navigation, new check, export.
fn handle_results_keys(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('n') => app.reset(),
        KeyCode::Char('b') | KeyCode::Tab | KeyCode::Left => app.show(View::Input),
        KeyCode::Char('d') => app.export_report(),
        KeyCode::Up => app.scroll_up(),
        KeyCode::Down => app.scroll_down(),
        _ => {}
    }
}
