use serde::{Deserialize, Serialize};

use crate::models::YearMonth;

/// One month of published data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSet {
  /// Month the data set covers.
  pub date: YearMonth,
  /// Ids of forces with stop-and-search data for the month.
  #[serde(rename = "stop-and-search", default)]
  pub stop_and_search: Vec<String>,
}
