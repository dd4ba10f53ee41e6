// Service exports
pub mod geocode;
pub mod jobstore;

pub use geocode::{GeocodeClient, GeocodeError, GeocodeOutcome};
pub use jobstore::{JobStoreClient, JobStoreError};
