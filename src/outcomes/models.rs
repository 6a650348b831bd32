use serde::{Deserialize, Serialize};

use crate::crimes::Crime;
use crate::models::YearMonth;

/// An outcome recorded against a crime at a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
  pub category: OutcomeCategory,
  pub date: YearMonth,
  #[serde(default)]
  pub person_id: Option<i64>,
  pub crime: Crime,
}

/// Category of an outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeCategory {
  /// Category code, e.g. `no-further-action`.
  pub code: String,
  pub name: String,
}

/// The full outcome history of one crime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseHistory {
  pub crime: Crime,
  #[serde(default)]
  pub outcomes: Vec<CaseHistoryOutcome>,
}

/// One step in a crime's outcome history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseHistoryOutcome {
  pub category: OutcomeCategory,
  pub date: YearMonth,
  #[serde(default)]
  pub person_id: Option<i64>,
}
