//! Cache key derivation.

use crate::models::Coordinate;

/// A query shape that derives its own canonical cache key.
///
/// Keys are a fixed domain prefix plus the query's identifying fields in a
/// fixed order, so two logically identical queries always produce
/// byte-identical keys and two different queries never collide. Date fields
/// are truncated to [`crate::models::YearMonth`] before they reach a key: the
/// upstream data is monthly, and day-precision keys would only fragment the
/// cache.
pub trait CacheKey {
  /// Canonical key string for this query.
  fn cache_key(&self) -> String;
}

/// Render a coordinate for use inside a cache key.
///
/// Fixed precision keeps keys byte-identical for equal inputs.
pub(crate) fn coordinate_key_part(coordinate: Coordinate) -> String {
  format!("{:.6}-{:.6}", coordinate.latitude, coordinate.longitude)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn coordinate_part_is_stable_and_discriminating() {
    let leicester = Coordinate {
      latitude: 52.6394,
      longitude: -1.13119,
    };
    let nearby = Coordinate {
      latitude: 52.6395,
      longitude: -1.13119,
    };

    assert_eq!(coordinate_key_part(leicester), "52.639400--1.131190");
    assert_eq!(coordinate_key_part(leicester), coordinate_key_part(leicester));
    assert_ne!(coordinate_key_part(leicester), coordinate_key_part(nearby));
  }
}
