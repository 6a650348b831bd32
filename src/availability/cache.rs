//! Cache keys and typed cache surface for availability data.

use std::sync::Arc;

use crate::cache::{CacheKey, CacheStore};

use super::models::DataSet;

/// Query shapes issued by the availability repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvailabilityQueryKey {
  /// The list of months with published data.
  AvailableDataSets,
}

impl CacheKey for AvailabilityQueryKey {
  fn cache_key(&self) -> String {
    match self {
      Self::AvailableDataSets => "available-data-sets".to_string(),
    }
  }
}

/// Typed cache façade for availability data.
///
/// Owns the key shapes for this context and forwards to the shared store with
/// the right value types; it holds no state beyond the store reference.
#[derive(Clone)]
pub struct AvailabilityCache<S> {
  store: Arc<S>,
}

impl<S: CacheStore> AvailabilityCache<S> {
  pub fn new(store: Arc<S>) -> Self {
    Self { store }
  }

  pub fn available_data_sets(&self) -> Option<Vec<DataSet>> {
    self
      .store
      .get(&AvailabilityQueryKey::AvailableDataSets.cache_key())
  }

  /// Stores the list; `None` removes it.
  pub fn set_available_data_sets(&self, data_sets: Option<Vec<DataSet>>) {
    let key = AvailabilityQueryKey::AvailableDataSets.cache_key();
    match data_sets {
      Some(data_sets) => self.store.set(&key, &data_sets, None),
      None => self.store.remove(&key),
    }
  }
}
