//! TUI application state and logic

use crate::console::HINT_COMMAND;
use crate::console::menu::{MenuChoice, ShopChoice};
use crate::core::Difficulty;
use crate::game::{
    AchievementKind, GuessOutcome, HintError, HintKind, MAX_HINTS_PER_WORD, Round, RoundState,
    Session,
};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Maximum messages kept in the log panel
const MESSAGE_LIMIT: usize = 6;

/// Application state
pub struct App {
    pub session: Session,
    pub input_mode: InputMode,
    pub round: Option<Round>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Menu,
    ChooseDifficulty,
    Guessing,
    HintMenu,
    Shop,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self {
            session,
            input_mode: InputMode::Menu,
            round: None,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Welcome! Press 1 to play, 2 for the shop, 3 to quit.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MESSAGE_LIMIT {
            self.messages.remove(0);
        }
    }

    /// Dispatch one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Menu => self.handle_menu_key(key.code),
            InputMode::ChooseDifficulty => self.handle_difficulty_key(key.code),
            InputMode::Guessing => self.handle_guess_key(key.code),
            InputMode::HintMenu => self.handle_hint_key(key.code),
            InputMode::Shop => self.handle_shop_key(key.code),
            InputMode::RoundOver => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                    self.round = None;
                    self.input_mode = InputMode::Menu;
                }
            }
        }
    }

    fn handle_menu_key(&mut self, code: KeyCode) {
        let KeyCode::Char(c) = code else {
            if code == KeyCode::Esc {
                self.should_quit = true;
            }
            return;
        };

        if c == 'q' {
            self.should_quit = true;
            return;
        }

        match MenuChoice::parse(&c.to_string()) {
            Ok(MenuChoice::Play) => self.input_mode = InputMode::ChooseDifficulty,
            Ok(MenuChoice::Shop) => self.input_mode = InputMode::Shop,
            Ok(MenuChoice::Exit) => self.should_quit = true,
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn handle_difficulty_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.input_mode = InputMode::Menu,
            KeyCode::Char(c) => match Difficulty::from_choice(&c.to_string()) {
                Ok(difficulty) => self.start_round(difficulty),
                Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
            },
            _ => {}
        }
    }

    pub fn start_round(&mut self, difficulty: Difficulty) {
        match self.session.start_round(difficulty) {
            Ok(round) => {
                self.add_message(
                    &format!("{difficulty} round started. Unscramble the word!"),
                    MessageStyle::Info,
                );
                self.round = Some(round);
                self.input_buffer.clear();
                self.input_mode = InputMode::Guessing;
            }
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                self.input_mode = InputMode::Menu;
            }
        }
    }

    fn handle_guess_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Tab => self.open_hint_menu(),
            KeyCode::Char(c) if c.is_ascii_graphic() => self.input_buffer.push(c),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => {
                let input = std::mem::take(&mut self.input_buffer);
                if input.eq_ignore_ascii_case(HINT_COMMAND) {
                    self.open_hint_menu();
                } else if !input.is_empty() {
                    self.submit_guess(&input);
                }
            }
            _ => {}
        }
    }

    fn open_hint_menu(&mut self) {
        let hints_used = self.round.as_ref().map_or(0, Round::hints_used);
        if hints_used >= MAX_HINTS_PER_WORD {
            self.add_message(&HintError::LimitReached.to_string(), MessageStyle::Error);
        } else {
            self.input_mode = InputMode::HintMenu;
        }
    }

    pub fn submit_guess(&mut self, guess: &str) {
        let Some(round) = self.round.as_mut() else {
            return;
        };

        let report = match self.session.guess(round, guess) {
            Ok(report) => report,
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        };

        match report.outcome {
            GuessOutcome::Correct(award) => {
                self.add_message(
                    &format!(
                        "Correct! +{} points ({} combo). Streak {}",
                        award.points, award.combo_bonus, award.streak
                    ),
                    MessageStyle::Success,
                );
                self.input_mode = InputMode::RoundOver;
            }
            GuessOutcome::Incorrect { attempts_left } => {
                self.add_message(
                    &format!("Incorrect guess. Attempts left: {attempts_left}"),
                    MessageStyle::Error,
                );
            }
            GuessOutcome::GameOver { answer } => {
                self.add_message(
                    &format!("Game Over! The correct answer was \"{answer}\""),
                    MessageStyle::Error,
                );
                self.input_mode = InputMode::RoundOver;
            }
        }

        self.announce(&report.unlocked);
    }

    fn announce(&mut self, unlocked: &[AchievementKind]) {
        for kind in unlocked {
            self.add_message(
                &format!("{} Achievement unlocked: {}", kind.cheer(), kind.name()),
                MessageStyle::Success,
            );
        }
    }

    fn handle_hint_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.input_mode = InputMode::Guessing,
            KeyCode::Char(c) => {
                let Some(round) = self.round.as_mut() else {
                    return;
                };
                let result =
                    HintKind::from_choice(&c.to_string()).and_then(|kind| self.session.hint(round, kind));
                match result {
                    Ok(outcome) => {
                        let text = format!(
                            "{} (score {})",
                            outcome.hint,
                            self.session.score().score()
                        );
                        self.add_message(&text, MessageStyle::Info);
                        self.input_mode = InputMode::Guessing;
                    }
                    Err(err @ HintError::InvalidChoice(_)) => {
                        self.add_message(&err.to_string(), MessageStyle::Error);
                    }
                    Err(err) => {
                        self.add_message(&err.to_string(), MessageStyle::Error);
                        self.input_mode = InputMode::Guessing;
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_shop_key(&mut self, code: KeyCode) {
        let KeyCode::Char(c) = code else {
            if code == KeyCode::Esc {
                self.input_mode = InputMode::Menu;
            }
            return;
        };

        match ShopChoice::parse(&c.to_string()) {
            Ok(ShopChoice::LoadWords) => {
                match self.session.buy_words() {
                    Ok(report) => {
                        self.add_message(
                            &format!("{} new words added!", report.added),
                            MessageStyle::Success,
                        );
                        if report.capacity_exceeded() {
                            self.add_message(
                                &format!(
                                    "The word list is full; {} more words were left out.",
                                    report.dropped
                                ),
                                MessageStyle::Error,
                            );
                        }
                    }
                    Err(err) => {
                        self.add_message(&err.to_string(), MessageStyle::Error);
                        self.add_message("0 new words added!", MessageStyle::Info);
                    }
                }
                self.input_mode = InputMode::Menu;
            }
            Ok(ShopChoice::Leave) => self.input_mode = InputMode::Menu,
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Attempts left in the current round, if one is running
    #[must_use]
    pub fn attempts_left(&self) -> Option<u32> {
        self.round
            .as_ref()
            .filter(|r| r.state() == RoundState::AwaitingGuess)
            .map(Round::attempts_left)
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
