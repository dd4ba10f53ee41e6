use serde::{Deserialize, Serialize};
use crate::models::domain::JobView;

/// Response for the discover jobs endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoverJobsResponse {
    pub jobs: Vec<JobView>,
    #[serde(rename = "totalJobs")]
    pub total_jobs: usize,
}

/// Response for the geocode endpoint
///
/// Mirrors the edge-function envelope the job map expects: always 200, with
/// null coordinates and an error message when the location cannot be placed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodeResponse {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
