//! Guessing game flow
//!
//! A [`Game`] owns one [`DrawSession`] and walks through rounds: draw a
//! secret, take guesses until one matches, then wait for a restart. Every
//! visible change goes through a [`DisplaySurface`].

use displaysurface::DisplaySurface;
use rand::Rng;
use rand::rngs::ThreadRng;
use tracing::{debug, info};

use crate::draw::{Draw, DrawSession};
use crate::error::{DrawError, GuessError};

/// Heading region
pub const TITLE_REGION: &str = "title";
/// Prompt and feedback region
pub const MESSAGE_REGION: &str = "message";
/// Input field holding the player's guess
pub const GUESS_FIELD: &str = "guess";
/// Control that starts the next round
pub const RESTART_CONTROL: &str = "restart";

pub const TITLE_TEXT: &str = "Secret number game";
pub const LOWER_TEXT: &str = "The secret number is lower";
pub const HIGHER_TEXT: &str = "The secret number is higher";
pub const EXHAUSTED_TEXT: &str = "Every possible number has already been drawn";

/// Where the game currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing drawn yet; [`Game::start`] has not run
    Idle,
    Guessing { secret: u32, attempts: u32 },
    Won { secret: u32, attempts: u32 },
    Exhausted,
}

/// What a submitted guess led to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Correct { attempts: u32 },
    /// Guess was above the secret
    TooHigh,
    /// Guess was below the secret
    TooLow,
    Invalid(GuessError),
    /// No round is in progress
    NotPlaying,
}

/// Parse a guess the way the player typed it
pub fn parse_guess(input: &str) -> Result<i64, GuessError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(GuessError::Empty);
    }
    trimmed.parse::<i64>().map_err(|_| GuessError::NotANumber {
        input: trimmed.to_string(),
    })
}

fn prompt_text(maximum: u32) -> String {
    format!("Pick a number from 1 to {}", maximum)
}

fn win_text(attempts: u32) -> String {
    let noun = if attempts == 1 { "attempt" } else { "attempts" };
    format!("You guessed the number in {} {}!", attempts, noun)
}

/// One player's game: a draw session plus the current round
#[derive(Debug)]
pub struct Game<R = ThreadRng> {
    session: DrawSession<R>,
    phase: Phase,
}

impl Game<ThreadRng> {
    pub fn new(maximum: u32) -> Result<Self, DrawError> {
        Ok(Self::with_session(DrawSession::new(maximum)?))
    }
}

impl<R: Rng> Game<R> {
    /// Wrap an existing session; call [`Game::start`] to draw the first secret
    pub fn with_session(session: DrawSession<R>) -> Self {
        Self {
            session,
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn session(&self) -> &DrawSession<R> {
        &self.session
    }

    /// Whether the restart control is live
    pub fn can_restart(&self) -> bool {
        matches!(self.phase, Phase::Won { .. })
    }

    /// Show the prompt and draw a fresh secret from the session
    pub fn start(&mut self, surface: &mut dyn DisplaySurface) {
        surface.set_text(TITLE_REGION, TITLE_TEXT);
        surface.set_text(MESSAGE_REGION, &prompt_text(self.session.maximum()));
        surface.set_disabled(RESTART_CONTROL, true);

        self.phase = match self.session.draw() {
            Draw::Number(secret) => {
                debug!(secret, "Game::start: secret drawn");
                Phase::Guessing { secret, attempts: 1 }
            }
            Draw::Exhausted => {
                info!(maximum = self.session.maximum(), "Game::start: draw space exhausted");
                surface.set_text(MESSAGE_REGION, EXHAUSTED_TEXT);
                Phase::Exhausted
            }
        };
    }

    /// Read the guess field and compare it with the secret
    pub fn submit(&mut self, surface: &mut dyn DisplaySurface) -> Outcome {
        let Phase::Guessing { secret, attempts } = self.phase else {
            debug!(phase = ?self.phase, "Game::submit: no round in progress");
            return Outcome::NotPlaying;
        };

        let guess = match parse_guess(&surface.read_input_value(GUESS_FIELD)) {
            Ok(guess) => guess,
            Err(e) => {
                debug!(error = %e, "Game::submit: invalid guess");
                surface.set_text(
                    MESSAGE_REGION,
                    &format!("{}. {}", e, prompt_text(self.session.maximum())),
                );
                surface.clear_input(GUESS_FIELD);
                return Outcome::Invalid(e);
            }
        };

        let secret_value = i64::from(secret);
        if guess == secret_value {
            info!(secret, attempts, "Game::submit: guessed");
            surface.set_text(MESSAGE_REGION, &win_text(attempts));
            surface.set_disabled(RESTART_CONTROL, false);
            self.phase = Phase::Won { secret, attempts };
            return Outcome::Correct { attempts };
        }

        let outcome = if guess > secret_value {
            surface.set_text(MESSAGE_REGION, LOWER_TEXT);
            Outcome::TooHigh
        } else {
            surface.set_text(MESSAGE_REGION, HIGHER_TEXT);
            Outcome::TooLow
        };
        self.phase = Phase::Guessing {
            secret,
            attempts: attempts + 1,
        };
        surface.clear_input(GUESS_FIELD);
        debug!(guess, attempts = attempts + 1, "Game::submit: miss");
        outcome
    }

    /// Start the next round on the same session
    ///
    /// Only allowed after a win; returns false when the control is disabled.
    pub fn restart(&mut self, surface: &mut dyn DisplaySurface) -> bool {
        if !self.can_restart() {
            debug!(phase = ?self.phase, "Game::restart: control disabled");
            return false;
        }
        surface.clear_input(GUESS_FIELD);
        self.start(surface);
        true
    }

    /// Discard every drawn value and start over
    pub fn new_session(&mut self, surface: &mut dyn DisplaySurface) {
        info!(drawn = self.session.drawn_count(), "Game::new_session");
        self.session.reset();
        surface.clear_input(GUESS_FIELD);
        self.start(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use displaysurface::MemorySurface;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn game(maximum: u32) -> Game<StdRng> {
        Game::with_session(DrawSession::with_rng(maximum, StdRng::seed_from_u64(11)).unwrap())
    }

    fn secret_of(game: &Game<StdRng>) -> u32 {
        match game.phase() {
            Phase::Guessing { secret, .. } => secret,
            other => panic!("not guessing: {:?}", other),
        }
    }

    fn guess(game: &mut Game<StdRng>, surface: &mut MemorySurface, value: &str) -> Outcome {
        surface.set_input_value(GUESS_FIELD, value);
        game.submit(surface)
    }

    #[test]
    fn test_parse_guess() {
        assert_eq!(parse_guess(" 7 "), Ok(7));
        assert_eq!(parse_guess("-3"), Ok(-3));
        assert_eq!(parse_guess(""), Err(GuessError::Empty));
        assert_eq!(
            parse_guess("7a"),
            Err(GuessError::NotANumber {
                input: "7a".to_string()
            })
        );
    }

    #[test]
    fn test_new_game_is_idle_until_started() {
        let mut game = game(5);
        let mut surface = MemorySurface::new();
        assert_eq!(game.phase(), Phase::Idle);
        assert_eq!(game.session().drawn_count(), 0);
        assert!(!game.can_restart());
        assert_eq!(guess(&mut game, &mut surface, "1"), Outcome::NotPlaying);
        assert!(!game.restart(&mut surface));

        game.start(&mut surface);
        assert!(matches!(game.phase(), Phase::Guessing { attempts: 1, .. }));
    }

    #[test]
    fn test_start_shows_prompt_and_disables_restart() {
        let mut game = game(10);
        let mut surface = MemorySurface::new();
        game.start(&mut surface);

        assert_eq!(surface.text(TITLE_REGION), Some(TITLE_TEXT));
        assert_eq!(surface.text(MESSAGE_REGION), Some("Pick a number from 1 to 10"));
        assert!(surface.is_disabled(RESTART_CONTROL));
        assert!(matches!(game.phase(), Phase::Guessing { attempts: 1, .. }));
        assert_eq!(game.session().drawn_count(), 1);
    }

    #[test]
    fn test_first_guess_correct_is_singular() {
        let mut game = game(10);
        let mut surface = MemorySurface::new();
        game.start(&mut surface);
        let secret = secret_of(&game);

        let outcome = guess(&mut game, &mut surface, &secret.to_string());
        assert_eq!(outcome, Outcome::Correct { attempts: 1 });
        assert_eq!(surface.text(MESSAGE_REGION), Some("You guessed the number in 1 attempt!"));
        assert!(!surface.is_disabled(RESTART_CONTROL));
        assert!(game.can_restart());
    }

    #[test]
    fn test_hints_and_attempt_count() {
        let mut game = game(100);
        let mut surface = MemorySurface::new();
        game.start(&mut surface);
        let secret = secret_of(&game);

        assert_eq!(guess(&mut game, &mut surface, "1000"), Outcome::TooHigh);
        assert_eq!(surface.text(MESSAGE_REGION), Some(LOWER_TEXT));
        assert_eq!(surface.read_input_value(GUESS_FIELD), "");

        assert_eq!(guess(&mut game, &mut surface, "0"), Outcome::TooLow);
        assert_eq!(surface.text(MESSAGE_REGION), Some(HIGHER_TEXT));

        let outcome = guess(&mut game, &mut surface, &secret.to_string());
        assert_eq!(outcome, Outcome::Correct { attempts: 3 });
        assert_eq!(surface.text(MESSAGE_REGION), Some("You guessed the number in 3 attempts!"));
    }

    #[test]
    fn test_invalid_guess_is_recoverable() {
        let mut game = game(10);
        let mut surface = MemorySurface::new();
        game.start(&mut surface);

        let outcome = guess(&mut game, &mut surface, "ten");
        assert!(matches!(outcome, Outcome::Invalid(GuessError::NotANumber { .. })));
        assert!(surface.text(MESSAGE_REGION).unwrap().contains("'ten' is not a whole number"));
        assert_eq!(surface.read_input_value(GUESS_FIELD), "");
        assert!(matches!(game.phase(), Phase::Guessing { attempts: 1, .. }));
    }

    #[test]
    fn test_restart_only_after_win() {
        let mut game = game(10);
        let mut surface = MemorySurface::new();
        game.start(&mut surface);
        assert!(!game.restart(&mut surface));

        let secret = secret_of(&game);
        guess(&mut game, &mut surface, &secret.to_string());
        assert!(game.restart(&mut surface));

        let next = secret_of(&game);
        assert_ne!(next, secret);
        assert_eq!(game.session().drawn_count(), 2);
        assert!(surface.is_disabled(RESTART_CONTROL));
    }

    #[test]
    fn test_guess_after_win_is_ignored() {
        let mut game = game(3);
        let mut surface = MemorySurface::new();
        game.start(&mut surface);
        let secret = secret_of(&game);
        guess(&mut game, &mut surface, &secret.to_string());

        assert_eq!(guess(&mut game, &mut surface, "1"), Outcome::NotPlaying);
    }

    #[test]
    fn test_exhaustion_after_every_round() {
        let mut game = game(2);
        let mut surface = MemorySurface::new();
        game.start(&mut surface);

        for _ in 0..2 {
            let secret = secret_of(&game);
            guess(&mut game, &mut surface, &secret.to_string());
            assert!(game.restart(&mut surface));
        }

        assert_eq!(game.phase(), Phase::Exhausted);
        assert_eq!(surface.text(MESSAGE_REGION), Some(EXHAUSTED_TEXT));
        assert!(surface.is_disabled(RESTART_CONTROL));
        assert!(!game.restart(&mut surface));
        assert_eq!(guess(&mut game, &mut surface, "1"), Outcome::NotPlaying);
    }

    #[test]
    fn test_new_session_recovers_from_exhaustion() {
        let mut game = game(1);
        let mut surface = MemorySurface::new();
        game.start(&mut surface);
        guess(&mut game, &mut surface, "1");
        game.restart(&mut surface);
        assert_eq!(game.phase(), Phase::Exhausted);

        game.new_session(&mut surface);
        assert_eq!(game.phase(), Phase::Guessing { secret: 1, attempts: 1 });
        assert_eq!(game.session().drawn_count(), 1);
    }
}
