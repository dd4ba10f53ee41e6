use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{Category, Coordinates, SortKey};

/// Request to discover jobs
///
/// All criteria default to "match everything"; `user_location` is whatever
/// position the caller acquired on its side, if any.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DiscoverJobsRequest {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: Category,
    #[validate(range(min = 0.0))]
    #[serde(alias = "radius_km", rename = "radiusKm", default)]
    pub radius_km: Option<f64>,
    #[serde(alias = "sort_by", rename = "sortBy", default)]
    pub sort_by: SortKey,
    #[serde(alias = "user_location", rename = "userLocation", default)]
    pub user_location: Option<Coordinates>,
}

/// Request to geocode a free-text location
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GeocodeRequest {
    #[validate(length(min = 1))]
    pub location: String,
}
