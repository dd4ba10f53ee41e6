use thiserror::Error;

use crate::core::engine::DiscoveryEngine;
use crate::core::location::{ConsentStore, LocationAcquirer, PositionSource};
use crate::models::{Category, FilterCriteria, Job, JobView, SortKey};
use crate::services::jobstore::JobStoreError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListingError {
    #[error("distance sort requires a known user location")]
    DistanceSortUnavailable,
}

/// Stateful listing controller
///
/// Owns the ephemeral view state (loaded jobs, filter criteria, location
/// acquirer) and recomputes the visible sequence synchronously on every
/// state change. The ranking comparators stay unaware of the
/// location-dependent enablement rule; it is enforced here.
pub struct Listing<S: ConsentStore, P: PositionSource> {
    jobs: Vec<Job>,
    criteria: FilterCriteria,
    acquirer: LocationAcquirer<S, P>,
    engine: DiscoveryEngine,
    visible: Vec<JobView>,
    load_error: Option<String>,
}

impl<S: ConsentStore, P: PositionSource> Listing<S, P> {
    pub fn new(acquirer: LocationAcquirer<S, P>) -> Self {
        Self {
            jobs: Vec::new(),
            criteria: FilterCriteria::default(),
            acquirer,
            engine: DiscoveryEngine::new(),
            visible: Vec::new(),
            load_error: None,
        }
    }

    /// Run the location protocol for this session, then recompute
    pub async fn activate(&mut self) {
        self.acquirer.activate().await;
        self.recompute();
    }

    /// Ingest the outcome of a job-store fetch
    ///
    /// A transport failure keeps the previously loaded list (empty on first
    /// load) and records the error for the notification layer; browsing is
    /// never blocked.
    pub fn load(&mut self, fetched: Result<Vec<Job>, JobStoreError>) {
        match fetched {
            Ok(jobs) => {
                self.jobs = jobs;
                self.load_error = None;
            }
            Err(e) => {
                tracing::warn!("Job fetch failed, keeping {} loaded jobs: {}", self.jobs.len(), e);
                self.load_error = Some(e.to_string());
            }
        }
        self.recompute();
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.criteria.search = term.into();
        self.recompute();
    }

    pub fn set_location_filter(&mut self, filter: impl Into<String>) {
        self.criteria.location = filter.into();
        self.recompute();
    }

    pub fn set_category(&mut self, category: Category) {
        self.criteria.category = category;
        self.recompute();
    }

    pub fn set_radius(&mut self, radius_km: Option<f64>) {
        self.criteria.radius_km = radius_km;
        self.recompute();
    }

    /// Select the sort order
    ///
    /// The distance sort is rejected while the user's position is unknown;
    /// presentation layers surface that as a disabled option.
    pub fn set_sort(&mut self, key: SortKey) -> Result<(), ListingError> {
        if key == SortKey::Distance && self.acquirer.position().is_none() {
            return Err(ListingError::DistanceSortUnavailable);
        }

        self.criteria.sort_by = key;
        self.recompute();
        Ok(())
    }

    /// Explicit retry of the location protocol
    pub async fn enable_location(&mut self) {
        self.acquirer.enable_location().await;
        self.recompute();
    }

    pub fn dismiss_location_banner(&mut self) {
        self.acquirer.dismiss_banner();
    }

    /// Ordered sequence for the presentation layer
    pub fn visible(&self) -> &[JobView] {
        &self.visible
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn location_banner_visible(&self) -> bool {
        self.acquirer.banner_visible()
    }

    pub fn user_location(&self) -> Option<crate::models::Coordinates> {
        self.acquirer.position()
    }

    /// Last load failure, consumed by the transient-notification layer
    pub fn take_load_error(&mut self) -> Option<String> {
        self.load_error.take()
    }

    fn recompute(&mut self) {
        let result = self
            .engine
            .run(self.jobs.clone(), &self.criteria, self.acquirer.position());
        self.visible = result.jobs;
    }
}
