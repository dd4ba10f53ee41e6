use crate::core::{distance::haversine_distance, filters::matches_criteria, rank::rank};
use crate::models::{Coordinates, FilterCriteria, Job, JobView};

/// Result of one discovery run
#[derive(Debug)]
pub struct DiscoveryResult {
    pub jobs: Vec<JobView>,
    pub total_jobs: usize,
}

/// Discovery pipeline orchestrator
///
/// # Pipeline Stages
/// 1. Enrich each job with its distance from the caller, when computable
/// 2. Category / search / location / radius filtering
/// 3. Stable ranking by the selected sort key
///
/// `run` is a pure function of its inputs and recomputes the whole sequence
/// on every call; there is no incremental state between runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscoveryEngine;

impl DiscoveryEngine {
    pub fn new() -> Self {
        Self
    }

    /// Run the full discovery pipeline over an in-memory job list
    ///
    /// An empty list, all-empty criteria, and an absent caller position are
    /// all well-defined: empty criteria match everything, and without a
    /// position every distance is unknown, which disables the radius filter
    /// without excluding any job.
    pub fn run(
        &self,
        jobs: Vec<Job>,
        criteria: &FilterCriteria,
        user_location: Option<Coordinates>,
    ) -> DiscoveryResult {
        let total_jobs = jobs.len();

        let mut views: Vec<JobView> = jobs
            .into_iter()
            .map(|job| {
                let distance_km = enrich_distance(&job, user_location);
                JobView { job, distance_km }
            })
            .filter(|view| matches_criteria(&view.job, view.distance_km, criteria))
            .collect();

        rank(&mut views, criteria.sort_by);

        DiscoveryResult {
            jobs: views,
            total_jobs,
        }
    }
}

/// Distance is defined iff both endpoints are known; a NaN result (bad
/// stored coordinates) is normalized to unknown here so no later stage has
/// to re-check it.
fn enrich_distance(job: &Job, user_location: Option<Coordinates>) -> Option<f64> {
    let user = user_location?;
    let job_coords = job.coordinates()?;

    let distance = haversine_distance(
        user.latitude,
        user.longitude,
        job_coords.latitude,
        job_coords.longitude,
    );

    (!distance.is_nan()).then_some(distance)
}
