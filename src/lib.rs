//! Client library for the data.police.uk API.
//!
//! Every query goes through a cache-aside repository: probe an in-memory TTL
//! cache, fetch from the API on a miss, store the decoded result, return it.
//! A hit never touches the network; failures are surfaced as per-context
//! error enums and are never cached. The cache is process-lifetime only and
//! transparent to callers except for latency.
//!
//! ```no_run
//! use police_data_uk::PoliceDataClient;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = PoliceDataClient::new();
//! let forces = client.forces.police_forces().await?;
//! println!("{} forces", forces.len());
//! # Ok(())
//! # }
//! ```

pub mod availability;
pub mod cache;
pub mod client;
pub mod crimes;
pub mod forces;
pub mod models;
pub mod neighbourhoods;
pub mod outcomes;
pub mod stop_and_search;

use std::sync::Arc;

use availability::AvailabilityRepository;
use cache::{CacheStore, InMemoryCache};
use client::HttpApiClient;
use crimes::CrimeRepository;
use forces::PoliceForceRepository;
use neighbourhoods::NeighbourhoodRepository;
use outcomes::OutcomeRepository;
use stop_and_search::StopAndSearchRepository;

/// One repository per bounded context, sharing a single HTTP client and a
/// single cache store. Construction is explicit; there are no process-wide
/// singletons.
pub struct PoliceDataClient {
  pub availability: AvailabilityRepository<HttpApiClient, InMemoryCache>,
  pub crimes: CrimeRepository<HttpApiClient, InMemoryCache>,
  pub forces: PoliceForceRepository<HttpApiClient, InMemoryCache>,
  pub neighbourhoods: NeighbourhoodRepository<HttpApiClient, InMemoryCache>,
  pub outcomes: OutcomeRepository<HttpApiClient, InMemoryCache>,
  pub stop_and_search: StopAndSearchRepository<HttpApiClient, InMemoryCache>,
  store: Arc<InMemoryCache>,
}

impl PoliceDataClient {
  /// Client against the public API with a default cache (12 hour TTL,
  /// unbounded).
  pub fn new() -> Self {
    Self::with_parts(HttpApiClient::default(), InMemoryCache::new())
  }

  /// Client from an explicit transport and cache, e.g. a different base URL
  /// or a capacity-bounded cache.
  pub fn with_parts(client: HttpApiClient, cache: InMemoryCache) -> Self {
    let client = Arc::new(client);
    let store = Arc::new(cache);

    Self {
      availability: AvailabilityRepository::new(Arc::clone(&client), Arc::clone(&store)),
      crimes: CrimeRepository::new(Arc::clone(&client), Arc::clone(&store)),
      forces: PoliceForceRepository::new(Arc::clone(&client), Arc::clone(&store)),
      neighbourhoods: NeighbourhoodRepository::new(Arc::clone(&client), Arc::clone(&store)),
      outcomes: OutcomeRepository::new(Arc::clone(&client), Arc::clone(&store)),
      stop_and_search: StopAndSearchRepository::new(client, Arc::clone(&store)),
      store,
    }
  }

  /// Drop every cached entry.
  pub fn clear_cache(&self) {
    self.store.remove_all();
  }
}

impl Default for PoliceDataClient {
  fn default() -> Self {
    Self::new()
  }
}
