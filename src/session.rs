use std::collections::BTreeMap;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::question::Question;

/// Countdown budget for one attempt, in seconds.
pub const SESSION_SECONDS: u32 = 600;

/// What ended the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionCause {
    /// The user submitted from the last question.
    Submitted,
    /// The countdown reached zero.
    TimeExpired,
}

/// Result of one timer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still counting down; carries the new remaining seconds.
    Counting(u32),
    /// This tick reached zero and completed the session.
    Expired,
    /// The session was already complete; nothing changed.
    Halted,
}

/// Final tally, computed exactly once at completion and never revised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub correct: usize,
    pub total: usize,
    pub elapsed_seconds: u32,
    pub cause: CompletionCause,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("cannot start a session without questions")]
    EmptyDeck,
}

/// Returns a freshly shuffled copy of `questions`, with each question's
/// options independently shuffled. The input is never mutated and every
/// call draws an independent permutation from `rng`.
pub fn shuffle_deck<R: Rng + ?Sized>(rng: &mut R, questions: &[Question]) -> Vec<Question> {
    let mut deck: Vec<Question> = questions.to_vec();
    deck.shuffle(rng);

    for question in &mut deck {
        question.options.shuffle(rng);
    }

    deck
}

/// Counts the indices whose recorded answer equals the question's correct
/// answer exactly. Unanswered indices never count. Pure and idempotent.
pub fn count_correct(deck: &[Question], answers: &BTreeMap<usize, String>) -> usize {
    deck.iter()
        .enumerate()
        .filter(|(index, question)| {
            answers
                .get(index)
                .is_some_and(|answer| question.is_correct(answer))
        })
        .count()
}

/// Renders seconds as `minutes:seconds`, seconds zero-padded.
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Renders `correct / total` as a percentage with two decimal places.
pub fn percentage(correct: usize, total: usize) -> String {
    if total == 0 {
        return "0.00".to_string();
    }

    format!("{:.2}", (correct as f64 / total as f64) * 100.0)
}

/// One complete quiz attempt, from shuffle to timeout or submission.
///
/// All mutating operations are guarded: once `outcome` is set nothing can
/// change answers, position, clock, or the tab-switch count. A reset is a
/// wholesale replacement with a new `Session`, never a partial rewind.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    deck: Vec<Question>,
    answers: BTreeMap<usize, String>,
    current: usize,
    remaining_seconds: u32,
    started_at_ms: f64,
    tab_switches: u32,
    outcome: Option<Outcome>,
}

impl Session {
    /// Starts a session over a freshly shuffled copy of `questions`.
    ///
    /// `started_at_ms` is the wall-clock start in milliseconds; the session
    /// only ever subtracts it from the timestamp handed to the completing
    /// call, so any monotonic-enough source works.
    ///
    /// # Errors
    /// Returns [`SessionError::EmptyDeck`] if `questions` is empty.
    pub fn new<R: Rng + ?Sized>(
        rng: &mut R,
        questions: &[Question],
        started_at_ms: f64,
    ) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::EmptyDeck);
        }

        Ok(Self {
            deck: shuffle_deck(rng, questions),
            answers: BTreeMap::new(),
            current: 0,
            remaining_seconds: SESSION_SECONDS,
            started_at_ms,
            tab_switches: 0,
            outcome: None,
        })
    }

    pub fn deck(&self) -> &[Question] {
        &self.deck
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> &Question {
        &self.deck[self.current]
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.deck.len()
    }

    /// The recorded answer for a deck position, if any.
    pub fn answer(&self, index: usize) -> Option<&str> {
        self.answers.get(&index).map(String::as_str)
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn tab_switches(&self) -> u32 {
        self.tab_switches
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_complete(&self) -> bool {
        self.outcome.is_some()
    }

    /// Records `option` for the current question, overwriting any earlier
    /// choice. Ignored once the session is complete.
    pub fn select(&mut self, option: &str) {
        if self.is_complete() {
            return;
        }

        self.answers.insert(self.current, option.to_string());
    }

    /// Jumps to any in-range question without touching answers. Ignored
    /// once complete or when `index` is out of range.
    pub fn jump_to(&mut self, index: usize) {
        if self.is_complete() || index >= self.deck.len() {
            return;
        }

        self.current = index;
    }

    /// Moves to the next question, or submits when already on the last one.
    pub fn advance(&mut self, now_ms: f64) {
        if self.is_complete() {
            return;
        }

        if self.is_last() {
            self.complete(now_ms, CompletionCause::Submitted);
        } else {
            self.current += 1;
        }
    }

    /// Moves to the previous question; no-op at index 0 or once complete.
    pub fn retreat(&mut self) {
        if self.is_complete() || self.current == 0 {
            return;
        }

        self.current -= 1;
    }

    /// Advances the countdown by one second. Reaching zero completes the
    /// session within the same call, so callers never observe a live
    /// session with an exhausted clock. Ticks arriving after completion
    /// are suppressed.
    pub fn tick(&mut self, now_ms: f64) -> TickOutcome {
        if self.is_complete() {
            return TickOutcome::Halted;
        }

        self.remaining_seconds -= 1;

        if self.remaining_seconds == 0 {
            self.complete(now_ms, CompletionCause::TimeExpired);
            TickOutcome::Expired
        } else {
            TickOutcome::Counting(self.remaining_seconds)
        }
    }

    /// Counts one visible→hidden edge. Only live sessions accumulate
    /// switches; the summary reports whatever was counted before completion.
    pub fn record_hidden(&mut self) {
        if self.is_complete() {
            return;
        }

        self.tab_switches += 1;
    }

    fn complete(&mut self, now_ms: f64, cause: CompletionCause) {
        if self.is_complete() {
            return;
        }

        let elapsed_ms = (now_ms - self.started_at_ms).max(0.0);

        self.outcome = Some(Outcome {
            correct: count_correct(&self.deck, &self.answers),
            total: self.deck.len(),
            elapsed_seconds: (elapsed_ms / 1000.0).floor() as u32,
            cause,
        });
    }
}
