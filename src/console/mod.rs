//! Line-based console game
//!
//! Reads one line per prompt from any `BufRead` and writes to any `Write`,
//! so whole games can be scripted in tests. End of input exits quietly.

pub mod menu;

use crate::core::Difficulty;
use crate::game::{
    AchievementKind, GuessOutcome, HintError, HintKind, MAX_HINTS_PER_WORD, Round, Session,
};
use crate::wordlists::LoadReport;
use colored::Colorize;
use menu::{MenuChoice, ShopChoice};
use std::io::{self, BufRead, Write};

/// Input typed instead of a guess to open the hint menu
pub const HINT_COMMAND: &str = "hint";

/// Whether the game loop should carry on after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    /// Input ran out
    Stop,
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Play until the player exits or input runs out
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    pub fn run(&mut self, session: &mut Session) -> io::Result<()> {
        self.print_intro()?;
        self.print_rules()?;
        if self.read_line()?.is_none() {
            return Ok(());
        }

        loop {
            self.print_achievements(session)?;
            self.print_menu(session)?;

            let Some(line) = self.prompt("Enter your selection: ")? else {
                return Ok(());
            };

            let flow = match MenuChoice::parse(&line) {
                Ok(MenuChoice::Play) => self.play(session)?,
                Ok(MenuChoice::Shop) => self.shop(session)?,
                Ok(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting the game.")?;
                    return Ok(());
                }
                Err(err) => {
                    writeln!(self.output, "{}", err.to_string().red())?;
                    Flow::Continue
                }
            };

            if flow == Flow::Stop {
                return Ok(());
            }
        }
    }

    /// Returns `None` at end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.read_line()
    }

    fn press_enter(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "Press \"Enter\" to continue.")?;
        Ok(match self.read_line()? {
            Some(_) => Flow::Continue,
            None => Flow::Stop,
        })
    }

    fn play(&mut self, session: &mut Session) -> io::Result<Flow> {
        writeln!(self.output, "\nSelect Difficulty Level:")?;
        for band in Difficulty::ALL {
            writeln!(
                self.output,
                "{}. {} ({})",
                band.choice(),
                band.name(),
                band.length_label()
            )?;
        }

        let Some(line) = self.prompt("Enter your choice: ")? else {
            return Ok(Flow::Stop);
        };

        let difficulty = match Difficulty::from_choice(&line) {
            Ok(difficulty) => difficulty,
            Err(err) => {
                writeln!(self.output, "{}", err.to_string().red())?;
                return Ok(Flow::Continue);
            }
        };

        let mut round = match session.start_round(difficulty) {
            Ok(round) => round,
            Err(err) => {
                writeln!(self.output, "{}", format!("Error: {err}").red())?;
                return Ok(Flow::Continue);
            }
        };

        writeln!(
            self.output,
            "Anagram of the word is: {}",
            round.scrambled().bright_yellow().bold()
        )?;

        if self.guess_loop(session, &mut round)? == Flow::Stop {
            return Ok(Flow::Stop);
        }
        self.press_enter()
    }

    fn guess_loop(&mut self, session: &mut Session, round: &mut Round) -> io::Result<Flow> {
        loop {
            let Some(line) = self.prompt("Guess the word (or type 'hint' for a hint): ")? else {
                return Ok(Flow::Stop);
            };

            if line.is_empty() {
                continue;
            }

            if line.eq_ignore_ascii_case(HINT_COMMAND) {
                if self.hint(session, round)? == Flow::Stop {
                    return Ok(Flow::Stop);
                }
                continue;
            }

            let report = match session.guess(round, &line) {
                Ok(report) => report,
                Err(err) => {
                    writeln!(self.output, "{}", err.to_string().red())?;
                    break;
                }
            };

            match report.outcome {
                GuessOutcome::Correct(award) => {
                    writeln!(
                        self.output,
                        "{}",
                        format!(
                            "Correct! You earned {} points (including {} combo points)!",
                            award.points, award.combo_bonus
                        )
                        .green()
                        .bold()
                    )?;
                    writeln!(
                        self.output,
                        "Current streak: {} | Max streak: {}",
                        session.score().streak(),
                        session.score().max_streak()
                    )?;
                }
                GuessOutcome::Incorrect { attempts_left } => {
                    writeln!(
                        self.output,
                        "{}",
                        format!("Incorrect guess. Attempts left: {attempts_left}").yellow()
                    )?;
                }
                GuessOutcome::GameOver { answer } => {
                    writeln!(self.output, "{}", "Incorrect guess. Attempts left: 0".yellow())?;
                    writeln!(
                        self.output,
                        "{}",
                        format!("Game Over! The correct answer was \"{answer}\"")
                            .red()
                            .bold()
                    )?;
                }
            }

            self.announce(&report.unlocked)?;

            if round.is_finished() {
                break;
            }
        }

        Ok(Flow::Continue)
    }

    fn hint(&mut self, session: &mut Session, round: &mut Round) -> io::Result<Flow> {
        if round.hints_used() >= MAX_HINTS_PER_WORD {
            writeln!(self.output, "{}", HintError::LimitReached.to_string().red())?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "\nAvailable Hints:")?;
        for (i, kind) in HintKind::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, kind.description())?;
        }

        let Some(line) = self.prompt("Enter your choice: ")? else {
            return Ok(Flow::Stop);
        };

        let result = HintKind::from_choice(&line).and_then(|kind| session.hint(round, kind));
        match result {
            Ok(outcome) => {
                writeln!(self.output, "{}", outcome.hint.to_string().cyan())?;
                writeln!(
                    self.output,
                    "Hint cost deducted. Current score: {}",
                    session.score().score()
                )?;
            }
            Err(err) => writeln!(self.output, "{}", err.to_string().red())?,
        }

        Ok(Flow::Continue)
    }

    fn shop(&mut self, session: &mut Session) -> io::Result<Flow> {
        writeln!(self.output, "Welcome to the shop.")?;
        writeln!(self.output, "1. Load more difficult words")?;
        writeln!(self.output, "2. Exit shop")?;

        let Some(line) = self.prompt("Enter your choice: ")? else {
            return Ok(Flow::Stop);
        };

        match ShopChoice::parse(&line) {
            Ok(ShopChoice::LoadWords) => match session.buy_words() {
                Ok(report) => self.print_load_report(&report)?,
                Err(err) => {
                    writeln!(self.output, "{}", err.to_string().red())?;
                    writeln!(self.output, "0 new words added!")?;
                }
            },
            Ok(ShopChoice::Leave) => writeln!(self.output, "Exiting the shop.")?,
            Err(err) => {
                writeln!(self.output, "{}", err.to_string().red())?;
                writeln!(self.output, "Exiting the shop.")?;
            }
        }

        self.press_enter()
    }

    fn print_load_report(&mut self, report: &LoadReport) -> io::Result<()> {
        writeln!(
            self.output,
            "{}",
            format!("{} new words added!", report.added).green()
        )?;
        if report.capacity_exceeded() {
            writeln!(
                self.output,
                "{}",
                format!(
                    "The word list is full; {} more words were left out.",
                    report.dropped
                )
                .yellow()
            )?;
        }
        Ok(())
    }

    fn announce(&mut self, unlocked: &[AchievementKind]) -> io::Result<()> {
        for kind in unlocked {
            writeln!(
                self.output,
                "{} You earned the achievement: {}!",
                kind.cheer(),
                kind.name().bright_magenta().bold()
            )?;
        }
        Ok(())
    }

    fn print_intro(&mut self) -> io::Result<()> {
        let border = "═".repeat(44);
        writeln!(self.output, "\n{}", format!("╔{border}╗").bright_cyan())?;
        writeln!(
            self.output,
            "{}",
            "║                UNSCRAMBLE                  ║"
                .bright_cyan()
                .bold()
        )?;
        writeln!(self.output, "{}", format!("╚{border}╝").bright_cyan())?;
        writeln!(
            self.output,
            "Unscramble the anagram to find the hidden word. Pick a"
        )?;
        writeln!(
            self.output,
            "difficulty, chain correct answers for combo points, buy"
        )?;
        writeln!(
            self.output,
            "hints when stuck and load extra words from the shop.\n"
        )
    }

    fn print_rules(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", "RULES".bright_white().bold())?;
        writeln!(self.output, "  • Each word must be solved within 3 tries.")?;
        writeln!(
            self.output,
            "  • Points: word length + 2 for every word in your current streak."
        )?;
        writeln!(
            self.output,
            "  • A wrong guess breaks the streak; running out of tries resets your score."
        )?;
        writeln!(
            self.output,
            "  • Type 'hint' instead of a guess for a hint (1 point, 2 per word)."
        )?;
        writeln!(self.output, "Press \"Enter\" to continue.")
    }

    fn print_menu(&mut self, session: &Session) -> io::Result<()> {
        let rule = "─".repeat(40);
        writeln!(self.output, "\n{}", rule.cyan())?;
        writeln!(
            self.output,
            " Current Score: {}",
            session.score().score().to_string().bright_yellow()
        )?;
        writeln!(
            self.output,
            " Highest Score: {}",
            session.score().high_score().to_string().bright_yellow()
        )?;
        writeln!(self.output, "{}", rule.cyan())?;
        writeln!(self.output, "Choose an option from the menu")?;
        writeln!(self.output, "1. Play the game")?;
        writeln!(self.output, "2. Shop")?;
        writeln!(self.output, "3. Exit the game")
    }

    fn print_achievements(&mut self, session: &Session) -> io::Result<()> {
        writeln!(self.output, "\nAchievements:")?;
        for achievement in session.achievements().achievements() {
            let status = if achievement.achieved {
                "Achieved! ".green().to_string()
            } else {
                String::new()
            };
            writeln!(
                self.output,
                "- {}: {status}({})",
                achievement.kind.name(),
                achievement.kind.description()
            )?;
        }
        Ok(())
    }
}
