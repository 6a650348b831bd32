//! Cache keys and typed cache surface for crime data.

use std::sync::Arc;

use crate::cache::{coordinate_key_part, CacheKey, CacheStore};
use crate::models::{Coordinate, YearMonth};

use super::models::{Crime, CrimeCategory};

/// Query shapes issued by the crime repository.
#[derive(Debug, Clone, PartialEq)]
pub enum CrimeQueryKey {
  /// Street-level crimes within a mile of a coordinate.
  StreetLevelCrimes {
    coordinate: Coordinate,
    date: YearMonth,
  },
  /// Crimes at a specific street.
  CrimesForStreet { street_id: i64, date: YearMonth },
  /// Crimes that could not be mapped to a location.
  CrimesWithNoLocation {
    category_id: String,
    force_id: String,
    date: YearMonth,
  },
  /// Valid crime categories for a month.
  CrimeCategories { date: YearMonth },
}

impl CacheKey for CrimeQueryKey {
  fn cache_key(&self) -> String {
    match self {
      Self::StreetLevelCrimes { coordinate, date } => {
        format!(
          "street-level-crimes-{}-{date}",
          coordinate_key_part(*coordinate)
        )
      }
      Self::CrimesForStreet { street_id, date } => format!("crimes-street-{street_id}-{date}"),
      Self::CrimesWithNoLocation {
        category_id,
        force_id,
        date,
      } => format!("crimes-no-location-{category_id}-{force_id}-{date}"),
      Self::CrimeCategories { date } => format!("crime-categories-{date}"),
    }
  }
}

/// Typed cache façade for crime data.
#[derive(Clone)]
pub struct CrimeCache<S> {
  store: Arc<S>,
}

impl<S: CacheStore> CrimeCache<S> {
  pub fn new(store: Arc<S>) -> Self {
    Self { store }
  }

  pub fn street_level_crimes(&self, coordinate: Coordinate, date: YearMonth) -> Option<Vec<Crime>> {
    self
      .store
      .get(&CrimeQueryKey::StreetLevelCrimes { coordinate, date }.cache_key())
  }

  pub fn set_street_level_crimes(
    &self,
    coordinate: Coordinate,
    date: YearMonth,
    crimes: Option<Vec<Crime>>,
  ) {
    let key = CrimeQueryKey::StreetLevelCrimes { coordinate, date }.cache_key();
    match crimes {
      Some(crimes) => self.store.set(&key, &crimes, None),
      None => self.store.remove(&key),
    }
  }

  pub fn crimes_for_street(&self, street_id: i64, date: YearMonth) -> Option<Vec<Crime>> {
    self
      .store
      .get(&CrimeQueryKey::CrimesForStreet { street_id, date }.cache_key())
  }

  pub fn set_crimes_for_street(
    &self,
    street_id: i64,
    date: YearMonth,
    crimes: Option<Vec<Crime>>,
  ) {
    let key = CrimeQueryKey::CrimesForStreet { street_id, date }.cache_key();
    match crimes {
      Some(crimes) => self.store.set(&key, &crimes, None),
      None => self.store.remove(&key),
    }
  }

  pub fn crimes_with_no_location(
    &self,
    category_id: &str,
    force_id: &str,
    date: YearMonth,
  ) -> Option<Vec<Crime>> {
    self.store.get(
      &CrimeQueryKey::CrimesWithNoLocation {
        category_id: category_id.to_string(),
        force_id: force_id.to_string(),
        date,
      }
      .cache_key(),
    )
  }

  pub fn set_crimes_with_no_location(
    &self,
    category_id: &str,
    force_id: &str,
    date: YearMonth,
    crimes: Option<Vec<Crime>>,
  ) {
    let key = CrimeQueryKey::CrimesWithNoLocation {
      category_id: category_id.to_string(),
      force_id: force_id.to_string(),
      date,
    }
    .cache_key();
    match crimes {
      Some(crimes) => self.store.set(&key, &crimes, None),
      None => self.store.remove(&key),
    }
  }

  pub fn crime_categories(&self, date: YearMonth) -> Option<Vec<CrimeCategory>> {
    self
      .store
      .get(&CrimeQueryKey::CrimeCategories { date }.cache_key())
  }

  pub fn set_crime_categories(&self, date: YearMonth, categories: Option<Vec<CrimeCategory>>) {
    let key = CrimeQueryKey::CrimeCategories { date }.cache_key();
    match categories {
      Some(categories) => self.store.set(&key, &categories, None),
      None => self.store.remove(&key),
    }
  }
}
