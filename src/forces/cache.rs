//! Cache keys and typed cache surface for police force data.

use std::sync::Arc;

use crate::cache::{CacheKey, CacheStore};

use super::models::{PoliceForce, PoliceForceReference, PoliceOfficer};

/// Query shapes issued by the police force repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoliceForceQueryKey {
  /// The list of all forces.
  PoliceForces,
  /// A single force by id.
  PoliceForce { force_id: String },
  /// Senior officers of a force.
  SeniorOfficers { force_id: String },
}

impl CacheKey for PoliceForceQueryKey {
  fn cache_key(&self) -> String {
    match self {
      Self::PoliceForces => "police-forces".to_string(),
      Self::PoliceForce { force_id } => format!("police-force-{force_id}"),
      Self::SeniorOfficers { force_id } => format!("police-force-{force_id}-senior-officers"),
    }
  }
}

/// Typed cache façade for police force data.
#[derive(Clone)]
pub struct PoliceForceCache<S> {
  store: Arc<S>,
}

impl<S: CacheStore> PoliceForceCache<S> {
  pub fn new(store: Arc<S>) -> Self {
    Self { store }
  }

  pub fn police_forces(&self) -> Option<Vec<PoliceForceReference>> {
    self.store.get(&PoliceForceQueryKey::PoliceForces.cache_key())
  }

  pub fn set_police_forces(&self, forces: Option<Vec<PoliceForceReference>>) {
    let key = PoliceForceQueryKey::PoliceForces.cache_key();
    match forces {
      Some(forces) => self.store.set(&key, &forces, None),
      None => self.store.remove(&key),
    }
  }

  pub fn police_force(&self, force_id: &str) -> Option<PoliceForce> {
    self.store.get(
      &PoliceForceQueryKey::PoliceForce {
        force_id: force_id.to_string(),
      }
      .cache_key(),
    )
  }

  pub fn set_police_force(&self, force_id: &str, force: Option<PoliceForce>) {
    let key = PoliceForceQueryKey::PoliceForce {
      force_id: force_id.to_string(),
    }
    .cache_key();
    match force {
      Some(force) => self.store.set(&key, &force, None),
      None => self.store.remove(&key),
    }
  }

  pub fn senior_officers(&self, force_id: &str) -> Option<Vec<PoliceOfficer>> {
    self.store.get(
      &PoliceForceQueryKey::SeniorOfficers {
        force_id: force_id.to_string(),
      }
      .cache_key(),
    )
  }

  pub fn set_senior_officers(&self, force_id: &str, officers: Option<Vec<PoliceOfficer>>) {
    let key = PoliceForceQueryKey::SeniorOfficers {
      force_id: force_id.to_string(),
    }
    .cache_key();
    match officers {
      Some(officers) => self.store.set(&key, &officers, None),
      None => self.store.remove(&key),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn key_literals_are_stable() {
    assert_eq!(PoliceForceQueryKey::PoliceForces.cache_key(), "police-forces");
    assert_eq!(
      PoliceForceQueryKey::PoliceForce {
        force_id: "leicestershire".to_string()
      }
      .cache_key(),
      "police-force-leicestershire"
    );
    assert_eq!(
      PoliceForceQueryKey::SeniorOfficers {
        force_id: "leicestershire".to_string()
      }
      .cache_key(),
      "police-force-leicestershire-senior-officers"
    );
  }

  #[test]
  fn keys_distinguish_forces() {
    let a = PoliceForceQueryKey::PoliceForce {
      force_id: "leicestershire".to_string(),
    };
    let b = PoliceForceQueryKey::PoliceForce {
      force_id: "metropolitan".to_string(),
    };

    assert_ne!(a.cache_key(), b.cache_key());
  }
}
