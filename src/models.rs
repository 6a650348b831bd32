//! Domain value types shared across bounded contexts.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A WGS84 coordinate.
///
/// The API encodes latitude and longitude as strings; the serde round-trip
/// keeps that encoding so cached payloads match the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
  #[serde(with = "coordinate_string")]
  pub latitude: f64,
  #[serde(with = "coordinate_string")]
  pub longitude: f64,
}

/// Geographic bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateRegion {
  pub min_latitude: f64,
  pub max_latitude: f64,
  pub min_longitude: f64,
  pub max_longitude: f64,
}

impl CoordinateRegion {
  pub fn contains(&self, coordinate: Coordinate) -> bool {
    (self.min_latitude..=self.max_latitude).contains(&coordinate.latitude)
      && (self.min_longitude..=self.max_longitude).contains(&coordinate.longitude)
  }
}

/// The region the data set covers (the UK landmass).
///
/// Coordinate queries outside this box fail with the context's
/// "location outside of data set region" error before any remote call.
pub fn available_data_region() -> CoordinateRegion {
  CoordinateRegion {
    min_latitude: 49.8,
    max_latitude: 60.9,
    min_longitude: -8.65,
    max_longitude: 1.8,
  }
}

/// A calendar month.
///
/// The API publishes data at month granularity, so queries, cache keys and
/// payload dates never carry anything finer. Serialized as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
  year: i32,
  month: u32,
}

impl YearMonth {
  pub fn new(year: i32, month: u32) -> Option<Self> {
    (1..=12).contains(&month).then_some(Self { year, month })
  }

  pub fn year(&self) -> i32 {
    self.year
  }

  pub fn month(&self) -> u32 {
    self.month
  }
}

impl From<DateTime<Utc>> for YearMonth {
  /// Truncates a point in time to its month.
  fn from(value: DateTime<Utc>) -> Self {
    Self {
      year: value.year(),
      month: value.month(),
    }
  }
}

impl fmt::Display for YearMonth {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:04}-{:02}", self.year, self.month)
  }
}

/// Error parsing a `YYYY-MM` month string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid year-month '{input}'")]
pub struct ParseYearMonthError {
  input: String,
}

impl FromStr for YearMonth {
  type Err = ParseYearMonthError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let invalid = || ParseYearMonthError {
      input: s.to_string(),
    };

    let (year, month) = s.split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;

    YearMonth::new(year, month).ok_or_else(invalid)
  }
}

impl Serialize for YearMonth {
  fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

impl<'de> Deserialize<'de> for YearMonth {
  fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
  }
}

/// Where something happened, snapped to the nearest street.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
  #[serde(with = "coordinate_string")]
  pub latitude: f64,
  #[serde(with = "coordinate_string")]
  pub longitude: f64,
  pub street: Street,
}

/// The approximate street a location snaps to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Street {
  pub id: i64,
  pub name: String,
}

/// Contact details attached to forces, officers and neighbourhoods.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
  #[serde(default)]
  pub email: Option<String>,
  #[serde(default)]
  pub telephone: Option<String>,
  #[serde(default)]
  pub mobile: Option<String>,
  #[serde(default)]
  pub website: Option<String>,
  #[serde(default)]
  pub facebook: Option<String>,
  #[serde(default)]
  pub twitter: Option<String>,
}

/// Serde adaptor for coordinates the API encodes as strings.
pub(crate) mod coordinate_string {
  use serde::{Deserialize, Deserializer, Serializer};

  pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
  }

  pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
      Number(f64),
      Text(String),
    }

    match Raw::deserialize(deserializer)? {
      Raw::Number(value) => Ok(value),
      Raw::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
  }
}
