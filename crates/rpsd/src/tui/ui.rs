//! UI rendering using ratatui.

use super::app::App;
use super::HOW_TO_PLAY;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use rpsd::{Card, Correctness, Phase};

/// Draws the main UI.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(7),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Rock Paper Scissors, but Different")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    render_cards(f, chunks[1], app);

    let status = Paragraph::new(status_line(app))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[2]);

    let input_style = if app.input_enabled() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let help = Paragraph::new("R: Rock | P: Paper | S: Scissors | H: How to play | Q: Quit")
        .style(input_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);

    if app.show_help() {
        let area = center_rect(f.area(), 76, 22);
        f.render_widget(Clear, area);
        let dialog = Paragraph::new(HOW_TO_PLAY)
            .block(Block::default().borders(Borders::ALL).title("How to play"));
        f.render_widget(dialog, area);
    }
}

fn status_line(app: &App) -> String {
    let score = app.score();
    let phase = match app.phase() {
        Phase::Idle => "starting",
        Phase::Preparing(_) => "dealing",
        Phase::Revealing => "revealing",
        Phase::AwaitingInput(_) => "your turn",
        Phase::Judging(_) => "judging",
        Phase::RoundComplete => "round over",
    };
    let input = if app.input_enabled() { "open" } else { "closed" };
    format!(
        "{} | Wins {} Losses {} | {} | {} | input {}",
        app.status_message(),
        score.wins(),
        score.losses(),
        app.difficulty().to_string().to_uppercase(),
        phase,
        input
    )
}

fn render_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = app.cards();
    if cards.is_empty() {
        return;
    }
    let constraints = vec![Constraint::Ratio(1, cards.len() as u32); cards.len()];
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    let active = match app.phase() {
        Phase::AwaitingInput(i) => Some(i),
        _ => None,
    };
    for (i, card) in cards.iter().enumerate() {
        render_card(f, center_rect(slots[i], 20, 7), card, i, active == Some(i));
    }
}

fn render_card(f: &mut Frame, area: Rect, card: &Card, index: usize, active: bool) {
    let border = match card.correctness() {
        Some(Correctness::Correct) => Style::default().fg(Color::Green),
        Some(Correctness::Incorrect) => Style::default().fg(Color::Red),
        None if active => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        None => Style::default(),
    };
    let lines = if card.is_revealed() {
        vec![
            Line::from(card.hand().to_string().to_uppercase()),
            Line::from(""),
            Line::from(card.directive().to_string().to_uppercase())
                .style(Style::default().add_modifier(Modifier::BOLD)),
        ]
    } else {
        vec![Line::from("???"), Line::from(""), Line::from("???")]
    };
    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(format!("Card {}", index + 1)),
    );
    f.render_widget(widget, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
