//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::Difficulty;
use crate::game::{HintKind, MAX_ATTEMPTS, MAX_HINTS_PER_WORD};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 UNSCRAMBLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(3)])
        .split(area);

    let (title, content) = match app.input_mode {
        InputMode::Menu => (" Menu ", menu_lines(app)),
        InputMode::ChooseDifficulty => (" Difficulty ", difficulty_lines()),
        InputMode::Shop => (" Shop ", shop_lines(app)),
        InputMode::HintMenu => (" Hints ", hint_lines(app)),
        InputMode::Guessing | InputMode::RoundOver => (" Puzzle ", puzzle_lines(app)),
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, chunks[0]);

    render_attempts(f, app, chunks[1]);
}

fn menu_lines(app: &App) -> Vec<Line<'static>> {
    vec![
        Line::from(format!(
            "{} words loaded ({} max)",
            app.session.store().len(),
            app.session.store().capacity()
        )),
        Line::from(""),
        Line::from("1. Play the game"),
        Line::from("2. Shop"),
        Line::from("3. Exit the game"),
    ]
}

fn difficulty_lines() -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("Select Difficulty Level:"), Line::from("")];
    lines.extend(Difficulty::ALL.iter().map(|band| {
        Line::from(format!(
            "{}. {} ({})",
            band.choice(),
            band.name(),
            band.length_label()
        ))
    }));
    lines
}

fn shop_lines(app: &App) -> Vec<Line<'static>> {
    vec![
        Line::from("Welcome to the shop."),
        Line::from(format!(
            "Room for {} more words.",
            app.session.store().remaining()
        )),
        Line::from(""),
        Line::from("1. Load more difficult words"),
        Line::from("2. Exit shop"),
    ]
}

fn hint_lines(app: &App) -> Vec<Line<'static>> {
    let used = app.round.as_ref().map_or(0, crate::game::Round::hints_used);
    let mut lines = vec![
        Line::from(format!(
            "Available Hints ({used}/{MAX_HINTS_PER_WORD} used, 1 point each):"
        )),
        Line::from(""),
    ];
    lines.extend(
        HintKind::ALL
            .iter()
            .enumerate()
            .map(|(i, kind)| Line::from(format!("{}. {}", i + 1, kind.description()))),
    );
    lines
}

fn puzzle_lines(app: &App) -> Vec<Line<'static>> {
    let Some(round) = app.round.as_ref() else {
        return vec![Line::from("No round in progress")];
    };

    let spaced: String = round
        .scrambled()
        .to_uppercase()
        .chars()
        .map(|c| format!("{c} "))
        .collect();

    let mut lines = vec![
        Line::from(vec![
            Span::raw("Anagram: "),
            Span::styled(
                spaced,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(format!("Difficulty: {}", round.difficulty())),
        Line::from(format!(
            "Hints used: {}/{MAX_HINTS_PER_WORD}",
            round.hints_used()
        )),
    ];

    if app.input_mode == InputMode::RoundOver {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("The word was: {}", round.target()),
            Style::default().fg(Color::Green),
        )));
    }

    lines
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let attempts = app.attempts_left().unwrap_or(0);
    let percent = (attempts * 100 / MAX_ATTEMPTS) as u16;

    let color = match attempts {
        3 => Color::Green,
        2 => Color::Yellow,
        _ => Color::Red,
    };

    let gauge = Gauge::default()
        .block(Block::default().title(" Attempts ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{attempts}/{MAX_ATTEMPTS} attempts left"));

    f.render_widget(gauge, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Score
            Constraint::Length(6), // Achievements
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_score(f, app, chunks[0]);
    render_achievements(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_score(f: &mut Frame, app: &App, area: Rect) {
    let score = app.session.score();
    let score_color = if score.score() < 0 {
        Color::Red
    } else {
        Color::Yellow
    };

    let content = vec![
        Line::from(vec![
            Span::raw("Score:      "),
            Span::styled(
                score.score().to_string(),
                Style::default()
                    .fg(score_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("High score: {}", score.high_score())),
        Line::from(format!("Streak:     {}", score.streak())),
        Line::from(format!("Max streak: {}", score.max_streak())),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Score ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_achievements(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .session
        .achievements()
        .achievements()
        .iter()
        .map(|a| {
            let (mark, style) = if a.achieved {
                ("★", Style::default().fg(Color::Magenta))
            } else {
                ("☆", Style::default().fg(Color::DarkGray))
            };
            ListItem::new(format!("{mark} {}", a.kind.name())).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Achievements ")
            .borders(Borders::ALL),
    );
    f.render_widget(list, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Guessing => (
            " Your guess | Enter to submit | TAB or 'hint' for a hint ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::RoundOver => (" Press Enter to continue ", "", Color::Green),
        InputMode::HintMenu => (" Choose a hint (1-3) | ESC to cancel ", "", Color::Cyan),
        InputMode::ChooseDifficulty => (" Choose difficulty (1-3) | ESC to go back ", "", Color::Cyan),
        InputMode::Shop => (" Choose 1 or 2 ", "", Color::Cyan),
        InputMode::Menu => (" Choose 1, 2 or 3 ", "", Color::Cyan),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let text = format!(
        "Words: {} | Achievements: {}/4 | Ctrl-C: Quit",
        app.session.store().len(),
        app.session.achievements().unlocked_count()
    );
    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
