use serde::{Deserialize, Serialize};

/// One entry in the mobile-food-facility dataset.
///
/// The dataset carries many more columns; only the fields interpreted by
/// this program are kept. Every field defaults to the empty string so a
/// sparse row still deserializes — a record with no usable hours simply
/// never passes the open-now filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vendor {
    #[serde(default)]
    pub applicant: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub dayofweekstr: String,
    #[serde(default)]
    pub starttime: String,
    #[serde(default)]
    pub endtime: String,
}
