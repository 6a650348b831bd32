//! Generic expiring key/value cache shared by every bounded context.
//!
//! The store has no knowledge of domain types: values are held as serialized
//! JSON, so one store safely holds payloads of different shapes, and a cached
//! value can never be mutated through a reader. Each bounded context layers a
//! typed façade and its own key shapes on top.

mod keys;
mod store;

pub(crate) use keys::coordinate_key_part;
pub use keys::CacheKey;
pub use store::{CacheStore, Clock, InMemoryCache, NoopCache, SystemClock};
