//! End-to-end round tests under paused tokio time.

use rpsd::{
    Board, BoardEvent, Card, ChannelSink, Correctness, Dealer, Difficulty, Directive, GameConfig,
    GameEvent, Hand, Outcome, Phase, RandomDealer, RoundOrchestrator, ScoreState, ScriptedDealer,
    SelectionSender, Timings, TokioClock, correct_answer,
};
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::time::Instant;

struct Harness {
    orchestrator: RoundOrchestrator,
    board_rx: UnboundedReceiver<BoardEvent>,
    event_rx: UnboundedReceiver<GameEvent>,
    sender: SelectionSender,
}

fn harness(dealer: impl Dealer + 'static, score: ScoreState) -> Harness {
    let (sink, board_rx) = ChannelSink::channel();
    let board = Board::new(sink);
    let sender = board.selection_sender();
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let orchestrator =
        RoundOrchestrator::new(board, Box::new(dealer), TokioClock, event_tx).with_score(score);
    Harness {
        orchestrator,
        board_rx,
        event_rx,
        sender,
    }
}

/// Plays the player's side: answers each open input window with the next
/// hand, and pokes every closed window to prove it rejects input.
///
/// Returns the board events seen up to the last answer, each stamped with
/// the (paused) time it was observed.
async fn answer_at(
    board_rx: &mut UnboundedReceiver<BoardEvent>,
    sender: &SelectionSender,
    answers: &[Hand],
) -> Vec<(Instant, BoardEvent)> {
    let mut seen = Vec::new();
    let mut answered = 0;
    while answered < answers.len() {
        let Some(event) = board_rx.recv().await else {
            break;
        };
        match event {
            BoardEvent::InputEnabled(true) => {
                assert!(sender.select(answers[answered]), "open window accepts");
                assert!(!sender.select(answers[answered]), "second answer dropped");
                answered += 1;
            }
            BoardEvent::InputEnabled(false) => {
                assert!(!sender.select(Hand::Rock), "closed window rejects");
            }
            _ => {}
        }
        seen.push((Instant::now(), event));
    }
    seen
}

async fn answer(
    board_rx: &mut UnboundedReceiver<BoardEvent>,
    sender: &SelectionSender,
    answers: &[Hand],
) -> Vec<BoardEvent> {
    answer_at(board_rx, sender, answers)
        .await
        .into_iter()
        .map(|(_, event)| event)
        .collect()
}

/// Times at which events matching `pred` were observed.
fn times(seen: &[(Instant, BoardEvent)], pred: impl Fn(&BoardEvent) -> bool) -> Vec<Instant> {
    seen.iter()
        .filter(|(_, event)| pred(event))
        .map(|(at, _)| *at)
        .collect()
}

fn is_hidden_refresh(event: &BoardEvent) -> bool {
    matches!(event, BoardEvent::Refreshed { card, .. } if !card.is_revealed())
}

fn is_input_opened(event: &BoardEvent) -> bool {
    *event == BoardEvent::InputEnabled(true)
}

fn slow_timings() -> Timings {
    Timings::default()
        .with_start_round_ms(40)
        .with_end_round_ms(900)
        .with_medium_show_ms(700)
        .with_medium_after_hide_ms(300)
        .with_hard_show_ms(1200)
        .with_hard_after_hide_ms(400)
        .with_debounce_ms(150)
}

fn drain<T>(rx: &mut UnboundedReceiver<T>) -> Vec<T> {
    let mut out = Vec::new();
    while let Ok(item) = rx.try_recv() {
        out.push(item);
    }
    out
}

fn phases(events: &[GameEvent]) -> Vec<Phase> {
    events
        .iter()
        .filter_map(|event| match event {
            GameEvent::PhaseChanged(phase) => Some(*phase),
            _ => None,
        })
        .collect()
}

#[tokio::test(start_paused = true)]
async fn test_easy_round_scores_wrong_answer() {
    let mut h = harness(
        ScriptedDealer::new([(Hand::Rock, Directive::Win)]),
        ScoreState::new(),
    );

    let (summary, seen) = tokio::join!(
        h.orchestrator.play_round(),
        answer(&mut h.board_rx, &h.sender, &[Hand::Scissors]),
    );
    let summary = summary.expect("round completes");

    assert_eq!(summary.round, 1);
    assert_eq!(summary.difficulty, Difficulty::Easy);
    assert_eq!(summary.judgments.len(), 1);
    let judgment = summary.judgments[0];
    assert_eq!(judgment.outcome, Outcome::Player2);
    assert_eq!(judgment.correctness, Correctness::Incorrect);

    let score = h.orchestrator.score();
    assert_eq!(score.wins(), 0);
    assert_eq!(score.losses(), 1);
    assert_eq!(score.rounds_played(), 1);

    let card = h.orchestrator.board().current().expect("one card dealt");
    assert_eq!(card.hand(), Hand::Rock);
    assert_eq!(card.correctness(), Some(Correctness::Incorrect));
    assert!(card.is_revealed());
    assert_eq!(h.orchestrator.phase(), Phase::RoundComplete);

    // Easy never hides the card before asking.
    assert!(!seen.iter().any(|event| matches!(
        event,
        BoardEvent::Refreshed { card, .. } if !card.is_revealed()
    )));
}

#[tokio::test(start_paused = true)]
async fn test_easy_round_scores_right_answer() {
    let mut h = harness(
        ScriptedDealer::new([(Hand::Scissors, Directive::Tie)]),
        ScoreState::new(),
    );

    let (summary, _) = tokio::join!(
        h.orchestrator.play_round(),
        answer(&mut h.board_rx, &h.sender, &[Hand::Scissors]),
    );
    let summary = summary.expect("round completes");

    assert_eq!(summary.judgments[0].outcome, Outcome::Tie);
    assert_eq!(summary.judgments[0].correctness, Correctness::Correct);
    assert_eq!(h.orchestrator.score(), ScoreState::from_record(1, 0));
}

#[tokio::test(start_paused = true)]
async fn test_medium_hides_card_before_input() {
    let mut h = harness(
        ScriptedDealer::new([(Hand::Paper, Directive::Lose)]),
        ScoreState::from_record(3, 0),
    );

    let (summary, seen) = tokio::join!(
        h.orchestrator.play_round(),
        answer(&mut h.board_rx, &h.sender, &[Hand::Rock]),
    );
    let summary = summary.expect("round completes");
    assert_eq!(summary.difficulty, Difficulty::Medium);

    let opened = seen
        .iter()
        .position(|event| *event == BoardEvent::InputEnabled(true))
        .expect("input opened");
    let last_refresh = seen[..opened]
        .iter()
        .rev()
        .find_map(|event| match event {
            BoardEvent::Refreshed { card, .. } => Some(card.clone()),
            _ => None,
        })
        .expect("card refreshed during reveal");
    assert!(!last_refresh.is_revealed(), "card hidden while awaiting input");

    let card = h.orchestrator.board().current().expect("one card dealt");
    assert!(card.is_revealed(), "card revealed after judging");
    assert_eq!(card.correctness(), Some(Correctness::Correct));
    assert_eq!(h.orchestrator.score(), ScoreState::from_record(4, 0));
}

#[tokio::test(start_paused = true)]
async fn test_hard_round_judges_every_card_in_order() {
    let script = [
        (Hand::Rock, Directive::Win),
        (Hand::Paper, Directive::Lose),
        (Hand::Scissors, Directive::Tie),
    ];
    let answers = [Hand::Paper, Hand::Paper, Hand::Scissors];
    let before = ScoreState::from_record(8, 0);
    let mut h = harness(ScriptedDealer::new(script), before);

    let (summary, _) = tokio::join!(
        h.orchestrator.play_round(),
        answer(&mut h.board_rx, &h.sender, &answers),
    );
    let summary = summary.expect("round completes");

    assert_eq!(summary.difficulty, Difficulty::Hard);
    let correctness: Vec<_> = summary.judgments.iter().map(|j| j.correctness).collect();
    assert_eq!(
        correctness,
        vec![
            Correctness::Correct,
            Correctness::Incorrect,
            Correctness::Correct
        ]
    );

    let after = h.orchestrator.score();
    assert_eq!(after.rounds_played(), before.rounds_played() + 3);
    assert_eq!(after.wins(), 10);
    assert_eq!(after.losses(), 1);
    assert_eq!(summary.score, after);

    let events = drain(&mut h.event_rx);
    assert_eq!(
        phases(&events),
        vec![
            Phase::Preparing(Difficulty::Hard),
            Phase::Revealing,
            Phase::AwaitingInput(0),
            Phase::Judging(0),
            Phase::AwaitingInput(1),
            Phase::Judging(1),
            Phase::AwaitingInput(2),
            Phase::Judging(2),
            Phase::RoundComplete,
        ]
    );
    let completions = events
        .iter()
        .filter(|event| matches!(event, GameEvent::RoundComplete(_)))
        .count();
    assert_eq!(completions, 1);
    assert!(matches!(events.last(), Some(GameEvent::RoundComplete(s)) if *s == summary));

    let cards = h.orchestrator.board().cards();
    assert_eq!(cards.len(), 3);
    assert!(cards.iter().all(Card::is_revealed));
    assert_eq!(h.orchestrator.board().cursor(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_run_escalates_difficulty_with_wins() {
    let Harness {
        mut orchestrator,
        mut board_rx,
        mut event_rx,
        sender,
    } = harness(RandomDealer::seeded(7), ScoreState::new());
    let rounds = 9;

    // Always answers correctly from the presented cards; stops once the
    // board is cleared for the round after `rounds`.
    let player = async {
        let mut cards: Vec<Card> = Vec::new();
        let mut answered = 0;
        let mut clears = 0;
        while let Some(event) = board_rx.recv().await {
            match event {
                BoardEvent::Cleared => {
                    clears += 1;
                    if clears > rounds {
                        break;
                    }
                    cards.clear();
                    answered = 0;
                }
                BoardEvent::Presented { card, .. } => cards.push(card),
                BoardEvent::InputEnabled(true) => {
                    let card = &cards[answered];
                    let hand = correct_answer(card.hand(), card.directive());
                    assert!(sender.select(hand));
                    answered += 1;
                }
                _ => {}
            }
        }
    };

    tokio::select! {
        result = orchestrator.run() => panic!("run returned early: {result:?}"),
        () = player => {}
    }

    let difficulties: Vec<_> = drain(&mut event_rx)
        .into_iter()
        .filter_map(|event| match event {
            GameEvent::RoundComplete(summary) => Some(summary.difficulty),
            _ => None,
        })
        .collect();
    use Difficulty::{Easy, Hard, Medium};
    assert_eq!(
        difficulties,
        vec![Easy, Easy, Easy, Medium, Medium, Medium, Medium, Medium, Hard]
    );
    assert_eq!(orchestrator.rounds_completed(), 9);
    assert_eq!(orchestrator.score(), ScoreState::from_record(11, 0));
}

#[tokio::test(start_paused = true)]
async fn test_pinned_difficulty_overrides_score() {
    let config = GameConfig::default().with_pinned_difficulty(Some("hard".to_string()));
    let mut h = harness(RandomDealer::seeded(1), ScoreState::new());
    h.orchestrator = h.orchestrator.configure(&config);

    let answers = [Hand::Rock, Hand::Rock, Hand::Rock];
    let (summary, _) = tokio::join!(
        h.orchestrator.play_round(),
        answer(&mut h.board_rx, &h.sender, &answers),
    );

    let summary = summary.expect("round completes");
    assert_eq!(summary.difficulty, Difficulty::Hard);
    assert_eq!(summary.judgments.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_unknown_pinned_difficulty_plays_easy() {
    let config = GameConfig::default().with_pinned_difficulty(Some("nightmare".to_string()));
    let mut h = harness(RandomDealer::seeded(1), ScoreState::from_record(8, 0));
    h.orchestrator = h.orchestrator.configure(&config);

    let (summary, _) = tokio::join!(
        h.orchestrator.play_round(),
        answer(&mut h.board_rx, &h.sender, &[Hand::Paper]),
    );

    let summary = summary.expect("round completes");
    assert_eq!(summary.difficulty, Difficulty::Easy);
    assert_eq!(h.orchestrator.board().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_round_survives_dropped_event_observer() {
    let mut h = harness(
        ScriptedDealer::new([(Hand::Rock, Directive::Lose)]),
        ScoreState::new(),
    );
    drop(h.event_rx);

    let (summary, _) = tokio::join!(
        h.orchestrator.play_round(),
        answer(&mut h.board_rx, &h.sender, &[Hand::Scissors]),
    );

    let summary = summary.expect("round completes");
    assert_eq!(summary.judgments[0].correctness, Correctness::Correct);
}

#[tokio::test(start_paused = true)]
async fn test_medium_reveal_pauses_elapse() {
    let timings = slow_timings();
    let config = GameConfig::default().with_timings(timings);
    let Harness {
        orchestrator,
        mut board_rx,
        sender,
        ..
    } = harness(
        ScriptedDealer::new([(Hand::Rock, Directive::Tie)]),
        ScoreState::from_record(3, 0),
    );
    let mut orchestrator = orchestrator.configure(&config);

    let round = async {
        let summary = orchestrator.play_round().await;
        (summary, Instant::now())
    };
    let ((summary, finished), seen) =
        tokio::join!(round, answer_at(&mut board_rx, &sender, &[Hand::Rock]));
    assert_eq!(summary.expect("round completes").difficulty, Difficulty::Medium);

    let cleared = times(&seen, |e| *e == BoardEvent::Cleared)[0];
    let presented = times(&seen, |e| matches!(e, BoardEvent::Presented { .. }))[0];
    let hidden = times(&seen, is_hidden_refresh);
    let opened = times(&seen, is_input_opened);
    assert_eq!(hidden.len(), 1);
    assert_eq!(opened.len(), 1);

    assert_eq!(presented - cleared, Duration::from_millis(timings.start_round_ms));
    assert_eq!(hidden[0] - presented, Duration::from_millis(timings.medium_show_ms));
    assert_eq!(
        opened[0] - hidden[0],
        Duration::from_millis(timings.medium_after_hide_ms)
    );
    // The answer lands the instant input opens; the board holds after it.
    assert_eq!(finished - opened[0], Duration::from_millis(timings.end_round_ms));
}

#[tokio::test(start_paused = true)]
async fn test_hard_reveal_and_debounce_pauses_elapse() {
    let timings = slow_timings();
    let config = GameConfig::default().with_timings(timings);
    let Harness {
        orchestrator,
        mut board_rx,
        sender,
        ..
    } = harness(
        ScriptedDealer::new([
            (Hand::Rock, Directive::Win),
            (Hand::Paper, Directive::Win),
            (Hand::Scissors, Directive::Win),
        ]),
        ScoreState::from_record(8, 0),
    );
    let mut orchestrator = orchestrator.configure(&config);

    let answers = [Hand::Paper, Hand::Scissors, Hand::Rock];
    let round = async {
        let summary = orchestrator.play_round().await;
        (summary, Instant::now())
    };
    let ((summary, finished), seen) =
        tokio::join!(round, answer_at(&mut board_rx, &sender, &answers));
    let summary = summary.expect("round completes");
    assert_eq!(summary.difficulty, Difficulty::Hard);
    assert_eq!(summary.score, ScoreState::from_record(11, 0));

    let presented = times(&seen, |e| matches!(e, BoardEvent::Presented { .. }));
    let hidden = times(&seen, is_hidden_refresh);
    let opened = times(&seen, is_input_opened);
    assert_eq!(presented.len(), 3);
    assert_eq!(hidden.len(), 3);
    assert_eq!(opened.len(), 3);

    // All three cards are dealt together and hidden together.
    assert!(presented.iter().all(|at| *at == presented[0]));
    assert!(hidden.iter().all(|at| *at == hidden[0]));
    assert_eq!(hidden[0] - presented[0], Duration::from_millis(timings.hard_show_ms));
    assert_eq!(
        opened[0] - hidden[0],
        Duration::from_millis(timings.hard_after_hide_ms)
    );

    // Each answer is judged the instant input opens, then input stays
    // closed for the debounce before the next card.
    let debounce = Duration::from_millis(timings.debounce_ms);
    assert_eq!(opened[1] - opened[0], debounce);
    assert_eq!(opened[2] - opened[1], debounce);
    assert_eq!(finished - opened[2], Duration::from_millis(timings.end_round_ms));
}
