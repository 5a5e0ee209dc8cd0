//! Interactive game session
//!
//! Lines that are not slash commands are typed into the guess field and
//! submitted, the terminal equivalent of pressing the "try" button.

use std::io::Write;

use colored::Colorize;
use displaysurface::{DisplaySurface, RegionStyle, TerminalSurface};
use eyre::Result;
use rand::Rng;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

use crate::game::{GUESS_FIELD, Game, MESSAGE_REGION, Outcome, Phase, TITLE_REGION};

/// What the loop should do after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Quit,
}

/// Interactive REPL around a [`Game`]
pub struct GameSession<R: Rng, W: Write> {
    game: Game<R>,
    surface: TerminalSurface<W>,
}

/// Terminal surface styled for the game regions
pub fn game_surface<W: Write>(out: W) -> TerminalSurface<W> {
    TerminalSurface::new(out)
        .with_style(TITLE_REGION, RegionStyle::Heading)
        .with_style(MESSAGE_REGION, RegionStyle::Plain)
}

impl<R: Rng, W: Write> GameSession<R, W> {
    pub fn new(game: Game<R>, surface: TerminalSurface<W>) -> Self {
        Self { game, surface }
    }

    pub fn game(&self) -> &Game<R> {
        &self.game
    }

    pub fn surface(&self) -> &TerminalSurface<W> {
        &self.surface
    }

    /// Show the title and draw the first secret
    pub fn begin(&mut self) {
        self.game.start(&mut self.surface);
    }

    /// Run the REPL main loop
    pub fn run(&mut self) -> Result<()> {
        self.begin();
        println!("Type {} for help, {} to quit", "/help".yellow(), "/quit".yellow());

        let mut rl = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;

        loop {
            match rl.readline(&format!("{} ", ">".bright_green())) {
                Ok(line) => {
                    let input = line.trim();
                    if input.is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(input);
                    if self.handle_line(input) == Step::Quit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!();
                    break;
                }
                Err(err) => {
                    return Err(eyre::eyre!("Readline error: {}", err));
                }
            }
        }

        println!("Goodbye!");
        Ok(())
    }

    /// Handle one line of input
    pub fn handle_line(&mut self, input: &str) -> Step {
        if input.starts_with('/') {
            return self.handle_slash_command(input);
        }

        self.surface.set_input_value(GUESS_FIELD, input);
        let outcome = self.game.submit(&mut self.surface);
        debug!(?outcome, "GameSession::handle_line");
        match outcome {
            Outcome::Correct { .. } => {
                println!("Type {} for another round", "/restart".yellow());
            }
            Outcome::NotPlaying => {
                if self.game.can_restart() {
                    println!("Type {} for another round", "/restart".yellow());
                } else {
                    println!("Type {} to start over", "/new".yellow());
                }
            }
            Outcome::TooHigh | Outcome::TooLow | Outcome::Invalid(_) => {}
        }
        Step::Continue
    }

    fn handle_slash_command(&mut self, input: &str) -> Step {
        let cmd = input.split_whitespace().next().unwrap_or("");

        match cmd {
            "/help" | "/h" => {
                self.print_help();
                Step::Continue
            }
            "/quit" | "/q" | "/exit" => Step::Quit,
            "/restart" | "/r" => {
                if !self.game.restart(&mut self.surface) {
                    println!("{}", "Restart is only available after a correct guess.".dimmed());
                }
                Step::Continue
            }
            "/new" | "/n" => {
                self.game.new_session(&mut self.surface);
                Step::Continue
            }
            "/status" | "/s" => {
                self.print_status();
                Step::Continue
            }
            _ => {
                println!("{} Unknown command: {}", "?".yellow(), cmd);
                println!("Type {} for available commands", "/help".yellow());
                Step::Continue
            }
        }
    }

    fn print_help(&self) {
        println!();
        println!("{}", "Available Commands:".bright_cyan());
        println!("  {:14} Show this help", "/help".yellow());
        println!("  {:14} Play another round after a win", "/restart".yellow());
        println!("  {:14} Forget drawn numbers and start over", "/new".yellow());
        println!("  {:14} Show drawn numbers and attempts", "/status".yellow());
        println!("  {:14} Exit the game", "/quit".yellow());
        println!();
        println!("Anything else is taken as a guess.");
        println!();
    }

    fn print_status(&self) {
        let session = self.game.session();
        println!();
        println!(
            "Drawn {} of {} ({} left)",
            session.drawn_count(),
            session.maximum(),
            session.remaining()
        );
        match self.game.phase() {
            Phase::Idle => println!("{}", "No round started".dimmed()),
            Phase::Guessing { attempts, .. } => println!("Attempt {} of this round", attempts),
            Phase::Won { attempts, .. } => println!("Round won in {} attempts", attempts),
            Phase::Exhausted => println!("{}", "No numbers left to draw".dimmed()),
        }
        println!();
    }
}
