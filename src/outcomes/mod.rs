//! Outcomes recorded against crimes, including full case histories.

mod cache;
mod models;
mod repository;

pub use cache::{OutcomeCache, OutcomeQueryKey};
pub use models::{CaseHistory, CaseHistoryOutcome, Outcome, OutcomeCategory};
pub use repository::{OutcomeError, OutcomeRepository};
