use serde::{Deserialize, Serialize};

use crate::models::{Location, YearMonth};

/// A reported crime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crime {
  /// Identifier within one month's data set.
  pub id: i64,
  /// Stable cross-month identifier; empty while not yet assigned.
  #[serde(rename = "persistent_id", default)]
  pub crime_id: String,
  /// Category id, e.g. `bicycle-theft`.
  pub category: String,
  #[serde(default)]
  pub context: Option<String>,
  /// Absent for crimes that could not be mapped to a location.
  #[serde(default)]
  pub location: Option<Location>,
  #[serde(default)]
  pub location_type: Option<String>,
  #[serde(default)]
  pub location_subtype: Option<String>,
  /// Month the crime was reported in.
  #[serde(rename = "month")]
  pub date: YearMonth,
  #[serde(default)]
  pub outcome_status: Option<OutcomeStatus>,
}

/// Latest outcome recorded against a crime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeStatus {
  pub category: String,
  pub date: YearMonth,
}

/// A crime category, keyed by its url slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrimeCategory {
  #[serde(rename = "url")]
  pub id: String,
  pub name: String,
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn crime_decodes_a_street_level_payload() {
    let crime: Crime = serde_json::from_value(json!({
      "id": 90362519,
      "persistent_id": "b3e2a4d3aeee4157cbd47a0ba0cd33cf6b4c91f0a6dc433e02b8cc0a2d0fd421",
      "category": "anti-social-behaviour",
      "context": "",
      "location": {
        "latitude": "52.640961",
        "longitude": "-1.126371",
        "street": { "id": 884343, "name": "On or near Wharf Street North" }
      },
      "location_type": "Force",
      "location_subtype": "",
      "month": "2021-05",
      "outcome_status": null
    }))
    .unwrap();

    assert_eq!(crime.id, 90362519);
    assert_eq!(crime.category, "anti-social-behaviour");
    assert_eq!(crime.date.to_string(), "2021-05");
    assert_eq!(crime.location.unwrap().street.id, 884343);
    assert!(crime.outcome_status.is_none());
  }

  #[test]
  fn crime_tolerates_a_missing_location() {
    let crime: Crime = serde_json::from_value(json!({
      "id": 1,
      "category": "burglary",
      "location": null,
      "month": "2021-05"
    }))
    .unwrap();

    assert!(crime.location.is_none());
    assert!(crime.crime_id.is_empty());
  }

  #[test]
  fn category_uses_the_url_slug_as_id() {
    let category: CrimeCategory =
      serde_json::from_value(json!({ "url": "all-crime", "name": "All crime" })).unwrap();

    assert_eq!(category.id, "all-crime");
    assert_eq!(category.name, "All crime");
  }
}
