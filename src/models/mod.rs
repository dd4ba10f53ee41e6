// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Category, Coordinates, FilterCriteria, Job, JobView, SortKey, RADIUS_PRESETS_KM};
pub use requests::{DiscoverJobsRequest, GeocodeRequest};
pub use responses::{DiscoverJobsResponse, ErrorResponse, GeocodeResponse, HealthResponse};
