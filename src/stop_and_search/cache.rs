//! Cache keys and typed cache surface for stop-and-search data.

use std::sync::Arc;

use crate::cache::{coordinate_key_part, CacheKey, CacheStore};
use crate::models::{Coordinate, YearMonth};

use super::models::StopAndSearch;

/// Query shapes issued by the stop-and-search repository.
#[derive(Debug, Clone, PartialEq)]
pub enum StopAndSearchQueryKey {
  /// Stops within a mile of a coordinate.
  AtCoordinate {
    coordinate: Coordinate,
    date: YearMonth,
  },
  /// Stops at a specific street.
  AtLocation { street_id: i64, date: YearMonth },
  /// Stops that could not be mapped to a location, per force.
  NoLocation { force_id: String, date: YearMonth },
  /// All stops reported by a force.
  Force { force_id: String, date: YearMonth },
}

impl CacheKey for StopAndSearchQueryKey {
  fn cache_key(&self) -> String {
    match self {
      Self::AtCoordinate { coordinate, date } => {
        format!(
          "stop-and-searches-{}-{date}",
          coordinate_key_part(*coordinate)
        )
      }
      Self::AtLocation { street_id, date } => {
        format!("stop-and-searches-location-{street_id}-{date}")
      }
      Self::NoLocation { force_id, date } => {
        format!("stop-and-searches-no-location-{force_id}-{date}")
      }
      Self::Force { force_id, date } => format!("stop-and-searches-force-{force_id}-{date}"),
    }
  }
}

/// Typed cache façade for stop-and-search data.
#[derive(Clone)]
pub struct StopAndSearchCache<S> {
  store: Arc<S>,
}

impl<S: CacheStore> StopAndSearchCache<S> {
  pub fn new(store: Arc<S>) -> Self {
    Self { store }
  }

  pub fn at_coordinate(&self, coordinate: Coordinate, date: YearMonth) -> Option<Vec<StopAndSearch>> {
    self
      .store
      .get(&StopAndSearchQueryKey::AtCoordinate { coordinate, date }.cache_key())
  }

  pub fn set_at_coordinate(
    &self,
    coordinate: Coordinate,
    date: YearMonth,
    stops: Option<Vec<StopAndSearch>>,
  ) {
    let key = StopAndSearchQueryKey::AtCoordinate { coordinate, date }.cache_key();
    match stops {
      Some(stops) => self.store.set(&key, &stops, None),
      None => self.store.remove(&key),
    }
  }

  pub fn at_location(&self, street_id: i64, date: YearMonth) -> Option<Vec<StopAndSearch>> {
    self
      .store
      .get(&StopAndSearchQueryKey::AtLocation { street_id, date }.cache_key())
  }

  pub fn set_at_location(
    &self,
    street_id: i64,
    date: YearMonth,
    stops: Option<Vec<StopAndSearch>>,
  ) {
    let key = StopAndSearchQueryKey::AtLocation { street_id, date }.cache_key();
    match stops {
      Some(stops) => self.store.set(&key, &stops, None),
      None => self.store.remove(&key),
    }
  }

  pub fn no_location(&self, force_id: &str, date: YearMonth) -> Option<Vec<StopAndSearch>> {
    self.store.get(
      &StopAndSearchQueryKey::NoLocation {
        force_id: force_id.to_string(),
        date,
      }
      .cache_key(),
    )
  }

  pub fn set_no_location(
    &self,
    force_id: &str,
    date: YearMonth,
    stops: Option<Vec<StopAndSearch>>,
  ) {
    let key = StopAndSearchQueryKey::NoLocation {
      force_id: force_id.to_string(),
      date,
    }
    .cache_key();
    match stops {
      Some(stops) => self.store.set(&key, &stops, None),
      None => self.store.remove(&key),
    }
  }

  pub fn for_force(&self, force_id: &str, date: YearMonth) -> Option<Vec<StopAndSearch>> {
    self.store.get(
      &StopAndSearchQueryKey::Force {
        force_id: force_id.to_string(),
        date,
      }
      .cache_key(),
    )
  }

  pub fn set_for_force(
    &self,
    force_id: &str,
    date: YearMonth,
    stops: Option<Vec<StopAndSearch>>,
  ) {
    let key = StopAndSearchQueryKey::Force {
      force_id: force_id.to_string(),
      date,
    }
    .cache_key();
    match stops {
      Some(stops) => self.store.set(&key, &stops, None),
      None => self.store.remove(&key),
    }
  }
}
