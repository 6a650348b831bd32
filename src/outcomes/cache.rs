//! Cache keys and typed cache surface for outcome data.

use std::sync::Arc;

use crate::cache::{coordinate_key_part, CacheKey, CacheStore};
use crate::models::{Coordinate, YearMonth};

use super::models::{CaseHistory, Outcome};

/// Query shapes issued by the outcome repository.
#[derive(Debug, Clone, PartialEq)]
pub enum OutcomeQueryKey {
  /// Outcomes near a coordinate.
  StreetLevelOutcomes {
    coordinate: Coordinate,
    date: YearMonth,
  },
  /// Outcomes at a specific street.
  StreetLevelOutcomesForStreet { street_id: i64, date: YearMonth },
  /// The case history of one crime.
  CaseHistory { crime_id: String },
}

impl CacheKey for OutcomeQueryKey {
  fn cache_key(&self) -> String {
    match self {
      Self::StreetLevelOutcomes { coordinate, date } => {
        format!(
          "street-level-outcomes-{}-{date}",
          coordinate_key_part(*coordinate)
        )
      }
      Self::StreetLevelOutcomesForStreet { street_id, date } => {
        format!("street-level-outcomes-street-{street_id}-{date}")
      }
      Self::CaseHistory { crime_id } => format!("case-history-{crime_id}"),
    }
  }
}

/// Typed cache façade for outcome data.
#[derive(Clone)]
pub struct OutcomeCache<S> {
  store: Arc<S>,
}

impl<S: CacheStore> OutcomeCache<S> {
  pub fn new(store: Arc<S>) -> Self {
    Self { store }
  }

  pub fn street_level_outcomes(
    &self,
    coordinate: Coordinate,
    date: YearMonth,
  ) -> Option<Vec<Outcome>> {
    self
      .store
      .get(&OutcomeQueryKey::StreetLevelOutcomes { coordinate, date }.cache_key())
  }

  pub fn set_street_level_outcomes(
    &self,
    coordinate: Coordinate,
    date: YearMonth,
    outcomes: Option<Vec<Outcome>>,
  ) {
    let key = OutcomeQueryKey::StreetLevelOutcomes { coordinate, date }.cache_key();
    match outcomes {
      Some(outcomes) => self.store.set(&key, &outcomes, None),
      None => self.store.remove(&key),
    }
  }

  pub fn street_level_outcomes_for_street(
    &self,
    street_id: i64,
    date: YearMonth,
  ) -> Option<Vec<Outcome>> {
    self
      .store
      .get(&OutcomeQueryKey::StreetLevelOutcomesForStreet { street_id, date }.cache_key())
  }

  pub fn set_street_level_outcomes_for_street(
    &self,
    street_id: i64,
    date: YearMonth,
    outcomes: Option<Vec<Outcome>>,
  ) {
    let key = OutcomeQueryKey::StreetLevelOutcomesForStreet { street_id, date }.cache_key();
    match outcomes {
      Some(outcomes) => self.store.set(&key, &outcomes, None),
      None => self.store.remove(&key),
    }
  }

  pub fn case_history(&self, crime_id: &str) -> Option<CaseHistory> {
    self.store.get(
      &OutcomeQueryKey::CaseHistory {
        crime_id: crime_id.to_string(),
      }
      .cache_key(),
    )
  }

  pub fn set_case_history(&self, crime_id: &str, case_history: Option<CaseHistory>) {
    let key = OutcomeQueryKey::CaseHistory {
      crime_id: crime_id.to_string(),
    }
    .cache_key();
    match case_history {
      Some(case_history) => self.store.set(&key, &case_history, None),
      None => self.store.remove(&key),
    }
  }
}
