//! Terminal front end.

mod app;
mod ui;

use anyhow::Result;
use app::App;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use rpsd::{
    Board, BoardEvent, ChannelSink, GameConfig, GameEvent, Hand, RoundOrchestrator,
    SelectionSender, TokioClock,
};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::sleep;
use tracing::{debug, error, info, instrument};

/// Text of the "how to play" dialog.
pub const HOW_TO_PLAY: &str = "\
HOW TO PLAY

Each card shows the computer's hand and a directive: WIN, LOSE or TIE.
Pick the hand that makes the matchup against the card come out that way.

  WIN   beat the card's hand      (card ROCK  -> play PAPER)
  LOSE  lose to the card's hand   (card ROCK  -> play SCISSORS)
  TIE   play the same hand        (card ROCK  -> play ROCK)

Difficulty rises with your correct answers:
  0-2 wins   EASY    one card, always visible
  3-7 wins   MEDIUM  one card, hidden before you answer
  8+  wins   HARD    three cards, all hidden; answer them in order

Keys: R rock | P paper | S scissors | H help | Q quit";

type Tui = Terminal<CrosstermBackend<Stdout>>;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs the game in the terminal until the player quits.
#[instrument(skip_all)]
pub async fn run_tui(config: GameConfig) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (sink, mut board_rx) = ChannelSink::channel();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    let board = Board::new(sink);
    let selections = board.selection_sender();
    let mut orchestrator =
        RoundOrchestrator::new(board, Box::new(config.dealer()), TokioClock, event_tx)
            .configure(&config);

    let orchestrator_handle = tokio::spawn(async move {
        if let Err(e) = orchestrator.run().await {
            error!(error = %e, "Orchestrator error");
        }
    });

    let res = run_app(&mut terminal, App::new(), &selections, &mut board_rx, &mut event_rx).await;

    orchestrator_handle.abort();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = ?err, "Terminal loop error");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

async fn run_app(
    terminal: &mut Tui,
    mut app: App,
    selections: &SelectionSender,
    board_rx: &mut mpsc::UnboundedReceiver<BoardEvent>,
    event_rx: &mut mpsc::UnboundedReceiver<GameEvent>,
) -> Result<()> {
    loop {
        while let Ok(event) = board_rx.try_recv() {
            app.handle_board_event(event);
        }
        while let Ok(event) = event_rx.try_recv() {
            app.handle_game_event(event);
        }

        terminal.draw(|f| ui::draw(f, &app))?;

        // Check for keyboard input (non-blocking)
        if event::poll(Duration::ZERO)?
            && let Event::Key(key) = event::read()?
            && key.kind != KeyEventKind::Release
            && handle_key(&mut app, selections, key.code) == KeyAction::Quit
        {
            info!("User quit");
            return Ok(());
        }

        // Poll rate
        sleep(POLL_INTERVAL).await;
    }
}

/// What the loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyAction {
    Continue,
    Quit,
}

fn handle_key(app: &mut App, selections: &SelectionSender, code: KeyCode) -> KeyAction {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => return KeyAction::Quit,
        KeyCode::Char('h') => app.toggle_help(),
        KeyCode::Char(c) => {
            if let Some(hand) = hand_for_key(c) {
                let accepted = selections.select(hand);
                debug!(%hand, accepted, "Hand key pressed");
                app.note_selection(hand, accepted);
            }
        }
        _ => {}
    }
    KeyAction::Continue
}

fn hand_for_key(c: char) -> Option<Hand> {
    match c.to_ascii_lowercase() {
        'r' => Some(Hand::Rock),
        'p' => Some(Hand::Paper),
        's' => Some(Hand::Scissors),
        _ => None,
    }
}
