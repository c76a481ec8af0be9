//! Shared, refreshable challenge state.

use std::sync::{Arc, PoisonError, RwLock};

use chrono::{Local, NaiveDate};
use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::info;

use crate::catalog;
use crate::challenges::Challenges;

/// Process-wide holder of the current [`Challenges`].
///
/// Readers take a cheap `Arc` snapshot; writers swap in a new snapshot under
/// the write lock, so a validation pass never observes a half-applied
/// refresh. Clones share the same state.
///
/// # Example
///
/// ```
/// use passgame_rules::ChallengeBoard;
///
/// let board = ChallengeBoard::new();
/// board.set_chess_move("Qh5");
///
/// let snapshot = board.snapshot();
/// assert_eq!(snapshot.chess_move.as_deref(), Some("Qh5"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChallengeBoard {
    current: Arc<RwLock<Arc<Challenges>>>,
}

impl ChallengeBoard {
    /// Creates an empty board. Challenge rules stay unsatisfied until refreshed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board holding `challenges`.
    pub fn with_challenges(challenges: Challenges) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(challenges))),
        }
    }

    /// Returns the current snapshot.
    pub fn snapshot(&self) -> Arc<Challenges> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Replaces the whole snapshot.
    pub fn replace(&self, challenges: Challenges) {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(challenges);
    }

    /// Applies `f` to a copy of the current snapshot and publishes the result.
    ///
    /// `f` runs under the write lock so concurrent updates are not lost.
    /// Compute new values before calling and keep `f` to plain assignments.
    pub fn update(&self, f: impl FnOnce(&mut Challenges)) {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = Challenges::clone(&guard);
        f(&mut next);
        *guard = Arc::new(next);
    }

    /// Draws a new 5-digit captcha code.
    pub fn refresh_captcha<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let code = format!("{:05}", rng.random_range(0..100_000u32));
        self.update(|c| c.captcha = Some(code.clone()));
        info!(event = "challenge_refreshed", challenge = "captcha");
        code
    }

    /// Draws a new QR code word.
    pub fn refresh_qr_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<String> {
        let word = catalog::QR_WORDS.choose(rng)?.to_string();
        self.update(|c| c.qr_word = Some(word.clone()));
        info!(event = "challenge_refreshed", challenge = "qr_word", word = %word);
        Some(word)
    }

    /// Draws a new mathematical constant.
    pub fn refresh_math_constant<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<String> {
        let constant = catalog::math_constant(rng.random_range(0..catalog::MATH_CONSTANTS.len()))?;
        let name = constant.name.clone();
        self.update(|c| c.math_constant = Some(constant));
        info!(event = "challenge_refreshed", challenge = "math_constant", name = %name);
        Some(name)
    }

    /// Draws a new colour.
    pub fn refresh_color<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<String> {
        let color = catalog::color(rng.random_range(0..catalog::COLORS.len()))?;
        let name = color.name.clone();
        self.update(|c| c.color = Some(color));
        info!(event = "challenge_refreshed", challenge = "color", name = %name);
        Some(name)
    }

    /// Sets the date for the date rules and the Wordle answer for that day.
    pub fn refresh_wordle(&self, date: NaiveDate) -> &'static str {
        let answer = catalog::wordle_answer(date);
        self.update(|c| {
            c.date = Some(date);
            c.wordle = Some(answer.to_string());
        });
        info!(
            event = "challenge_refreshed",
            challenge = "wordle",
            number = catalog::wordle_number(date),
        );
        answer
    }

    /// Publishes the best move for the current chess position.
    pub fn set_chess_move(&self, best_move: impl Into<String>) {
        let best_move = best_move.into();
        self.update(|c| c.chess_move = Some(best_move));
        info!(event = "challenge_refreshed", challenge = "chess_move");
    }

    /// Moves the date rules and the Wordle answer forward to `today`.
    ///
    /// Does nothing while the board holds no date or a date not before
    /// `today`. Returns whether the board changed.
    pub fn roll_date(&self, today: NaiveDate) -> bool {
        match self.snapshot().date {
            Some(date) if date < today => {
                self.refresh_wordle(today);
                true
            }
            _ => false,
        }
    }

    /// Refreshes every generated challenge for `date`.
    ///
    /// The chess move is left alone; it comes from an outside engine.
    pub fn refresh_all_on<R: Rng + ?Sized>(&self, rng: &mut R, date: NaiveDate) {
        self.refresh_captcha(rng);
        self.refresh_qr_word(rng);
        self.refresh_math_constant(rng);
        self.refresh_color(rng);
        self.refresh_wordle(date);
    }

    /// Refreshes every generated challenge for today, using the thread RNG.
    pub fn refresh_all(&self) {
        self.refresh_all_on(&mut rand::rng(), Local::now().date_naive());
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 14).unwrap()
    }

    #[test]
    fn empty_board_has_no_values() {
        let board = ChallengeBoard::new();
        assert_eq!(*board.snapshot(), Challenges::default());
    }

    #[test]
    fn refresh_all_fills_generated_values() {
        let board = ChallengeBoard::new();
        board.refresh_all_on(&mut ChaCha8Rng::seed_from_u64(7), day());

        let snapshot = board.snapshot();
        let code = snapshot.captcha.as_deref().unwrap();
        assert_eq!(code.len(), 5);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
        assert!(catalog::QR_WORDS.contains(&snapshot.qr_word.as_deref().unwrap()));
        assert!(snapshot.math_constant.is_some());
        assert!(snapshot.color.is_some());
        assert_eq!(snapshot.date, Some(day()));
        assert_eq!(snapshot.wordle.as_deref(), Some(catalog::wordle_answer(day())));
        assert!(snapshot.chess_move.is_none());
    }

    #[test]
    fn same_seed_same_challenges() {
        let a = ChallengeBoard::new();
        let b = ChallengeBoard::new();
        a.refresh_all_on(&mut ChaCha8Rng::seed_from_u64(42), day());
        b.refresh_all_on(&mut ChaCha8Rng::seed_from_u64(42), day());
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn roll_date_moves_date_rules_to_the_next_day() {
        let board = ChallengeBoard::new();
        assert!(!board.roll_date(day()));
        assert!(board.snapshot().date.is_none());

        board.refresh_wordle(day());
        let next = day().succ_opt().unwrap();
        assert!(board.roll_date(next));

        let snapshot = board.snapshot();
        assert_eq!(snapshot.date, Some(next));
        assert_eq!(snapshot.weekday_name(), Some("Tuesday"));
        assert_eq!(snapshot.wordle.as_deref(), Some(catalog::wordle_answer(next)));

        assert!(!board.roll_date(next));
        assert!(!board.roll_date(day()));
        assert_eq!(board.snapshot().date, Some(next));
    }

    #[test]
    fn concurrent_updates_of_different_fields_are_kept() {
        let board = ChallengeBoard::new();
        let captcha = {
            let board = board.clone();
            thread::spawn(move || {
                let mut rng = ChaCha8Rng::seed_from_u64(3);
                for _ in 0..200 {
                    board.refresh_captcha(&mut rng);
                }
            })
        };
        let chess = {
            let board = board.clone();
            thread::spawn(move || {
                for i in 0..200 {
                    board.set_chess_move(if i % 2 == 0 { "e4" } else { "d4" });
                }
            })
        };
        captcha.join().unwrap();
        chess.join().unwrap();

        let snapshot = board.snapshot();
        assert!(snapshot.captcha.is_some());
        assert_eq!(snapshot.chess_move.as_deref(), Some("d4"));
    }

    #[test]
    fn snapshots_are_isolated_from_later_updates() {
        let board = ChallengeBoard::new();
        board.set_chess_move("e4");
        let before = board.snapshot();

        board.set_chess_move("d4");
        assert_eq!(before.chess_move.as_deref(), Some("e4"));
        assert_eq!(board.snapshot().chess_move.as_deref(), Some("d4"));
    }

    #[test]
    fn clones_share_state() {
        let board = ChallengeBoard::new();
        let other = board.clone();
        other.replace(Challenges::default().with_captcha("11111"));
        assert_eq!(board.snapshot().captcha.as_deref(), Some("11111"));
    }

    #[test]
    fn concurrent_readers_and_writer() {
        let board = ChallengeBoard::new();
        let writer = {
            let board = board.clone();
            thread::spawn(move || {
                let mut rng = ChaCha8Rng::seed_from_u64(1);
                for _ in 0..100 {
                    board.refresh_captcha(&mut rng);
                }
            })
        };
        let readers: Vec<_> = (0..4)
            .map(|_| {
                let board = board.clone();
                thread::spawn(move || {
                    for _ in 0..100 {
                        if let Some(code) = board.snapshot().captcha.as_deref() {
                            assert_eq!(code.len(), 5);
                        }
                    }
                })
            })
            .collect();

        writer.join().unwrap();
        for reader in readers {
            reader.join().unwrap();
        }
        assert!(board.snapshot().captcha.is_some());
    }
}
