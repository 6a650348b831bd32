use serde::{Deserialize, Serialize};

use crate::models::{ContactDetails, Coordinate};

/// Reference to a neighbourhood in a force's list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighbourhoodReference {
  /// Identifier, unique within the force.
  pub id: String,
  /// Name as HTML.
  pub name: String,
}

/// Full details of a neighbourhood.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neighbourhood {
  pub id: String,
  /// Name as HTML.
  pub name: String,
  /// Description as HTML.
  #[serde(default)]
  pub description: Option<String>,
  /// Population, as the API reports it.
  #[serde(default)]
  pub population: Option<String>,
  #[serde(default)]
  pub contact_details: ContactDetails,
  pub centre: Coordinate,
  #[serde(default)]
  pub links: Vec<Link>,
}

/// A link attached to a neighbourhood.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
  pub title: String,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub url: Option<String>,
}

/// A policing priority for a neighbourhood.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighbourhoodPriority {
  /// The issue being addressed, as HTML.
  pub issue: String,
  #[serde(rename = "issue-date", default)]
  pub issue_date: Option<String>,
  /// Action taken, as HTML; absent while the priority is open.
  #[serde(default)]
  pub action: Option<String>,
  #[serde(rename = "action-date", default)]
  pub action_date: Option<String>,
}

/// The team responsible for a point: a force and one of its neighbourhoods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighbourhoodPolicingTeam {
  pub force: String,
  pub neighbourhood: String,
}
