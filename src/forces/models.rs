use serde::{Deserialize, Serialize};

use crate::models::ContactDetails;

/// Reference to a police force in the all-forces list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoliceForceReference {
  /// Unique force identifier, e.g. `leicestershire`.
  pub id: String,
  pub name: String,
}

/// Full details of a police force.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoliceForce {
  pub id: String,
  pub name: String,
  /// Description as HTML.
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub telephone: Option<String>,
  #[serde(default)]
  pub url: Option<String>,
  #[serde(default)]
  pub engagement_methods: Vec<EngagementMethod>,
}

/// A way of engaging with a force (web site, social media, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementMethod {
  pub title: String,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub url: Option<String>,
}

/// A police officer, as listed by the people endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoliceOfficer {
  pub name: String,
  #[serde(default)]
  pub rank: Option<String>,
  /// Biography as HTML.
  #[serde(default)]
  pub bio: Option<String>,
  #[serde(default)]
  pub contact_details: ContactDetails,
}
