//! Cache keys and typed cache surface for neighbourhood data.

use std::sync::Arc;

use crate::cache::{coordinate_key_part, CacheKey, CacheStore};
use crate::forces::PoliceOfficer;
use crate::models::Coordinate;

use super::models::{
  Neighbourhood, NeighbourhoodPolicingTeam, NeighbourhoodPriority, NeighbourhoodReference,
};

/// Query shapes issued by the neighbourhood repository.
#[derive(Debug, Clone, PartialEq)]
pub enum NeighbourhoodQueryKey {
  /// All neighbourhoods of a force.
  Neighbourhoods { force_id: String },
  /// A single neighbourhood.
  Neighbourhood { force_id: String, id: String },
  /// A neighbourhood's boundary polygon.
  Boundary { force_id: String, id: String },
  /// Officers of a neighbourhood team.
  PoliceOfficers { force_id: String, id: String },
  /// Policing priorities of a neighbourhood.
  Priorities { force_id: String, id: String },
  /// The team covering a point.
  PolicingTeam { coordinate: Coordinate },
}

impl CacheKey for NeighbourhoodQueryKey {
  fn cache_key(&self) -> String {
    match self {
      Self::Neighbourhoods { force_id } => format!("neighbourhoods-{force_id}"),
      Self::Neighbourhood { force_id, id } => format!("neighbourhood-{force_id}-{id}"),
      Self::Boundary { force_id, id } => format!("neighbourhood-{force_id}-{id}-boundary"),
      Self::PoliceOfficers { force_id, id } => {
        format!("neighbourhood-{force_id}-{id}-police-officers")
      }
      Self::Priorities { force_id, id } => format!("neighbourhood-{force_id}-{id}-priorities"),
      Self::PolicingTeam { coordinate } => {
        format!(
          "neighbourhood-policing-team-{}",
          coordinate_key_part(*coordinate)
        )
      }
    }
  }
}

/// Typed cache façade for neighbourhood data.
#[derive(Clone)]
pub struct NeighbourhoodCache<S> {
  store: Arc<S>,
}

impl<S: CacheStore> NeighbourhoodCache<S> {
  pub fn new(store: Arc<S>) -> Self {
    Self { store }
  }

  pub fn neighbourhoods(&self, force_id: &str) -> Option<Vec<NeighbourhoodReference>> {
    self.store.get(
      &NeighbourhoodQueryKey::Neighbourhoods {
        force_id: force_id.to_string(),
      }
      .cache_key(),
    )
  }

  pub fn set_neighbourhoods(
    &self,
    force_id: &str,
    neighbourhoods: Option<Vec<NeighbourhoodReference>>,
  ) {
    let key = NeighbourhoodQueryKey::Neighbourhoods {
      force_id: force_id.to_string(),
    }
    .cache_key();
    match neighbourhoods {
      Some(neighbourhoods) => self.store.set(&key, &neighbourhoods, None),
      None => self.store.remove(&key),
    }
  }

  pub fn neighbourhood(&self, id: &str, force_id: &str) -> Option<Neighbourhood> {
    self.store.get(
      &NeighbourhoodQueryKey::Neighbourhood {
        force_id: force_id.to_string(),
        id: id.to_string(),
      }
      .cache_key(),
    )
  }

  pub fn set_neighbourhood(&self, id: &str, force_id: &str, neighbourhood: Option<Neighbourhood>) {
    let key = NeighbourhoodQueryKey::Neighbourhood {
      force_id: force_id.to_string(),
      id: id.to_string(),
    }
    .cache_key();
    match neighbourhood {
      Some(neighbourhood) => self.store.set(&key, &neighbourhood, None),
      None => self.store.remove(&key),
    }
  }

  pub fn boundary(&self, id: &str, force_id: &str) -> Option<Vec<Coordinate>> {
    self.store.get(
      &NeighbourhoodQueryKey::Boundary {
        force_id: force_id.to_string(),
        id: id.to_string(),
      }
      .cache_key(),
    )
  }

  pub fn set_boundary(&self, id: &str, force_id: &str, boundary: Option<Vec<Coordinate>>) {
    let key = NeighbourhoodQueryKey::Boundary {
      force_id: force_id.to_string(),
      id: id.to_string(),
    }
    .cache_key();
    match boundary {
      Some(boundary) => self.store.set(&key, &boundary, None),
      None => self.store.remove(&key),
    }
  }

  pub fn police_officers(&self, id: &str, force_id: &str) -> Option<Vec<PoliceOfficer>> {
    self.store.get(
      &NeighbourhoodQueryKey::PoliceOfficers {
        force_id: force_id.to_string(),
        id: id.to_string(),
      }
      .cache_key(),
    )
  }

  pub fn set_police_officers(
    &self,
    id: &str,
    force_id: &str,
    officers: Option<Vec<PoliceOfficer>>,
  ) {
    let key = NeighbourhoodQueryKey::PoliceOfficers {
      force_id: force_id.to_string(),
      id: id.to_string(),
    }
    .cache_key();
    match officers {
      Some(officers) => self.store.set(&key, &officers, None),
      None => self.store.remove(&key),
    }
  }

  pub fn priorities(&self, id: &str, force_id: &str) -> Option<Vec<NeighbourhoodPriority>> {
    self.store.get(
      &NeighbourhoodQueryKey::Priorities {
        force_id: force_id.to_string(),
        id: id.to_string(),
      }
      .cache_key(),
    )
  }

  pub fn set_priorities(
    &self,
    id: &str,
    force_id: &str,
    priorities: Option<Vec<NeighbourhoodPriority>>,
  ) {
    let key = NeighbourhoodQueryKey::Priorities {
      force_id: force_id.to_string(),
      id: id.to_string(),
    }
    .cache_key();
    match priorities {
      Some(priorities) => self.store.set(&key, &priorities, None),
      None => self.store.remove(&key),
    }
  }

  pub fn policing_team(&self, coordinate: Coordinate) -> Option<NeighbourhoodPolicingTeam> {
    self
      .store
      .get(&NeighbourhoodQueryKey::PolicingTeam { coordinate }.cache_key())
  }

  pub fn set_policing_team(
    &self,
    coordinate: Coordinate,
    team: Option<NeighbourhoodPolicingTeam>,
  ) {
    let key = NeighbourhoodQueryKey::PolicingTeam { coordinate }.cache_key();
    match team {
      Some(team) => self.store.set(&key, &team, None),
      None => self.store.remove(&key),
    }
  }
}
