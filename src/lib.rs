pub mod bank;
pub mod demo;
pub mod question;
pub mod session;
pub mod wasm;

pub use bank::{BankError, BankLoadError, QuestionBank};
pub use demo::demo_questions;
pub use question::{Question, QuestionError};
pub use session::{
    CompletionCause, Outcome, SESSION_SECONDS, Session, SessionError, TickOutcome, count_correct,
    format_clock, percentage, shuffle_deck,
};
