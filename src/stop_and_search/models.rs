use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Location;

/// A single stop-and-search record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopAndSearch {
  /// Kind of search, e.g. `Person search` or `Vehicle search`.
  #[serde(rename = "type")]
  pub search_type: String,
  /// Whether a person was searched (as opposed to a vehicle only).
  #[serde(default)]
  pub involved_person: bool,
  pub datetime: DateTime<Utc>,
  /// Whether the stop was part of a policing operation.
  #[serde(default)]
  pub operation: Option<bool>,
  #[serde(default)]
  pub operation_name: Option<String>,
  #[serde(default)]
  pub location: Option<Location>,
  #[serde(default)]
  pub gender: Option<String>,
  #[serde(default)]
  pub age_range: Option<String>,
  #[serde(default)]
  pub self_defined_ethnicity: Option<String>,
  #[serde(default)]
  pub officer_defined_ethnicity: Option<String>,
  #[serde(default)]
  pub legislation: Option<String>,
  #[serde(default)]
  pub object_of_search: Option<String>,
  /// The API encodes "no outcome" as `false` rather than null.
  #[serde(default, deserialize_with = "outcome_from_wire")]
  pub outcome: Option<String>,
  #[serde(default)]
  pub outcome_linked_to_object_of_search: Option<bool>,
  #[serde(default)]
  pub removal_of_more_than_outer_clothing: Option<bool>,
}

fn outcome_from_wire<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
  D: serde::Deserializer<'de>,
{
  #[derive(Deserialize)]
  #[serde(untagged)]
  enum Raw {
    Text(String),
    Flag(bool),
  }

  match Option::<Raw>::deserialize(deserializer)? {
    Some(Raw::Text(text)) => Ok(Some(text)),
    Some(Raw::Flag(_)) | None => Ok(None),
  }
}
