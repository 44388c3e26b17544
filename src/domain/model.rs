use serde::{Deserialize, Serialize};

/// The delivery location the user is currently shopping under. Persisted as
/// camelCase JSON, matching the storefront payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryLocation {
    pub postal_code: String,
    pub depot_id: Option<String>,
    pub depot_name: Option<String>,
    pub area_id: Option<i64>,
    pub area_name: Option<String>,
}

impl DeliveryLocation {
    /// A location without a depot is not serviceable and does not count as set.
    pub fn is_complete(&self) -> bool {
        !self.postal_code.is_empty()
            && self.depot_id.as_deref().map_or(false, |id| !id.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceArea {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub depot: Option<Depot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Depot {
    pub id: i64,
    pub name: String,
}
