use serde::{Deserialize, Serialize};

/// A geographic point in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Job posting as stored in the `jobs` table
///
/// Coordinates are written by the job store's own geocoding step and are
/// absent when that step has not succeeded for the row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: uuid::Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub category: String,
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub skills: Vec<String>,
    pub wage: String,
    #[serde(rename = "type")]
    pub employment_type: String,
    #[serde(default = "default_positions")]
    pub positions_available: u32,
    #[serde(default)]
    pub positions_filled: u32,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Job {
    /// Geocoded position of the job, when the store has one
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates { latitude, longitude }),
            _ => None,
        }
    }
}

fn default_positions() -> u32 {
    1
}

/// The store sends `skills: null` for rows created before the column existed
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Job enriched with the distance from the caller's position
///
/// `distance_km` is present only when both the caller's position and the
/// job's coordinates are known; absent means "unknown", never zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobView {
    #[serde(flatten)]
    pub job: Job,
    #[serde(rename = "distanceKm", skip_serializing_if = "Option::is_none", default)]
    pub distance_km: Option<f64>,
}

/// Browse categories offered by the listing UI
///
/// `AllJobs` is the sentinel that matches every category tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    #[serde(rename = "All Jobs")]
    AllJobs,
    #[serde(rename = "Construction-Related Work")]
    Construction,
    #[serde(rename = "Loading & Unloading")]
    LoadingUnloading,
    #[serde(rename = "Household Work")]
    Household,
    #[serde(rename = "Outdoor & Agricultural Work")]
    OutdoorAgricultural,
    #[serde(rename = "Small Contract Work")]
    SmallContract,
}

impl Category {
    /// Display label, also used for the title-substring fallback match
    pub fn label(&self) -> &'static str {
        match self {
            Category::AllJobs => "All Jobs",
            Category::Construction => "Construction-Related Work",
            Category::LoadingUnloading => "Loading & Unloading",
            Category::Household => "Household Work",
            Category::OutdoorAgricultural => "Outdoor & Agricultural Work",
            Category::SmallContract => "Small Contract Work",
        }
    }
}

/// Sort order for the ranked listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Recent,
    Pay,
    Distance,
}

/// Radius presets offered by the distance filter, in kilometers
pub const RADIUS_PRESETS_KM: [f64; 3] = [5.0, 10.0, 25.0];

/// Current filter and sort state of the listing
///
/// The default criteria match every job and rank by recency.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCriteria {
    pub search: String,
    pub location: String,
    pub category: Category,
    pub radius_km: Option<f64>,
    pub sort_by: SortKey,
}
