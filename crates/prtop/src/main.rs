use anyhow::{anyhow, Context};
use chrono::Local;
use clap::Parser;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::{io, process::ExitCode, sync::Arc, time::Duration};
use tokio::sync::mpsc::{self, UnboundedReceiver};

mod actions;
mod cli;
mod command_id;
mod dispatcher;
mod domain_models;
mod effect_runner;
mod effects;
mod error;
mod fetcher;
mod keymap;
mod logger;
mod middleware;
mod reducer;
mod state;
mod store;
mod theme;
mod utils;
mod view_models;
mod views;

use actions::{Action, GlobalAction};
use cli::Cli;
use dispatcher::Dispatcher;
use effect_runner::EffectRunner;
use fetcher::PrFetcher;
use middleware::{keyboard_middleware::KeyboardMiddleware, logging_middleware::LoggingMiddleware};
use prtop_config::AppConfig;
use prtop_gh::GhCliClient;
use state::SessionState;
use store::Store;
use theme::Theme;
use view_models::ScreenViewModel;

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

/// How often the screen is redrawn without new actions (clock, live durations)
const REDRAW_INTERVAL: Duration = Duration::from_secs(1);
/// How long the input thread waits for a terminal event
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let target = cli.pr_target()?;

    match logger::init() {
        Ok(path) => log::info!("Starting prtop, logging to {}", path.display()),
        Err(err) => eprintln!("Warning: logging disabled: {:#}", err),
    }

    let mut config = AppConfig::load();
    if let Some(secs) = cli.interval {
        config = config.with_refresh_interval_secs(secs);
    }
    log::debug!("Config: {:?}", config);

    let client = GhCliClient::new(config.gh_command.clone());
    client.ensure_available().await.map_err(|err| {
        anyhow!(
            "{:#}\nInstall the GitHub CLI from https://cli.github.com/",
            err
        )
    })?;

    let (state, initial_effects) = match target {
        Some(target) => SessionState::viewing(target, config.refresh_interval(), config.hide_skipped),
        None => SessionState::selecting(config.refresh_interval(), config.hide_skipped),
    };

    let (action_tx, action_rx) = mpsc::unbounded_channel();
    let dispatcher = Dispatcher::new(action_tx);
    let fetcher = PrFetcher::new(Arc::new(client), config.pr_list_limit);
    let runner = EffectRunner::new(fetcher, dispatcher.clone());

    // Initialize store with middleware (they execute in this order)
    let mut store = Store::new(state, dispatcher.clone());
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new(keymap::default_keymap())));

    let mut terminal = setup_terminal().context("Failed to set up terminal")?;
    install_panic_hook();

    let result = run_app(
        &mut terminal,
        &mut store,
        &runner,
        dispatcher,
        action_rx,
        initial_effects,
    )
    .await;

    restore_terminal(&mut terminal).context("Failed to restore terminal")?;
    log::info!("Exiting prtop");
    result
}

async fn run_app(
    terminal: &mut Tui,
    store: &mut Store,
    runner: &EffectRunner,
    dispatcher: Dispatcher,
    mut action_rx: UnboundedReceiver<Action>,
    initial_effects: Vec<effects::Effect>,
) -> anyhow::Result<()> {
    let theme = Theme::default();

    let size = terminal.size()?;
    store.dispatch(
        GlobalAction::Resize {
            width: size.width,
            height: size.height,
        }
        .into(),
    );
    spawn_input_thread(dispatcher);
    runner.run_all(initial_effects);

    let mut redraw = tokio::time::interval(REDRAW_INTERVAL);

    loop {
        terminal.draw(|frame| {
            let vm = ScreenViewModel::from_state(store.state(), &theme, Local::now());
            views::render(&vm, frame.area(), frame);
        })?;

        if store.state().terminated {
            break;
        }

        tokio::select! {
            action = action_rx.recv() => match action {
                Some(action) => {
                    let effects = store.dispatch(action);
                    runner.run_all(effects);
                }
                None => break,
            },
            _ = redraw.tick() => {}
        }
    }

    Ok(())
}

/// Forward terminal events to the main loop
///
/// crossterm's event API is blocking, so it gets its own thread. The thread
/// stops once the main loop has dropped its receiver.
fn spawn_input_thread(dispatcher: Dispatcher) {
    std::thread::spawn(move || {
        while !dispatcher.is_closed() {
            match event::poll(INPUT_POLL_INTERVAL) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(err) => {
                    log::error!("Failed to poll terminal events: {}", err);
                    break;
                }
            }

            match event::read() {
                // Only process key press events (ignore key release)
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    dispatcher.dispatch(GlobalAction::KeyPressed(key));
                }
                Ok(Event::Resize(width, height)) => {
                    dispatcher.dispatch(GlobalAction::Resize { width, height });
                }
                Ok(_) => {}
                Err(err) => {
                    log::error!("Failed to read terminal event: {}", err);
                    break;
                }
            }
        }
        log::debug!("Input thread stopped");
    });
}

fn setup_terminal() -> io::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(terminal: &mut Tui) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

/// Leave the alternate screen before the panic message is printed
fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        log::error!("Panic: {}", info);
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}
