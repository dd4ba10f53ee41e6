// Core pipeline exports
pub mod distance;
pub mod engine;
pub mod filters;
pub mod listing;
pub mod location;
pub mod rank;

pub use distance::haversine_distance;
pub use engine::{DiscoveryEngine, DiscoveryResult};
pub use filters::{matches_category, matches_criteria, matches_location, matches_search, within_radius};
pub use listing::{Listing, ListingError};
pub use location::{
    ConsentState, ConsentStore, LocationAcquirer, MemoryConsentStore, PositionError, PositionSource,
};
pub use rank::{compare_distance, rank, wage_amount};
