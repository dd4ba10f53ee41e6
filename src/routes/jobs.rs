use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::DiscoveryEngine;
use crate::models::{
    DiscoverJobsRequest, DiscoverJobsResponse, ErrorResponse, FilterCriteria, GeocodeRequest,
    GeocodeResponse, HealthResponse, SortKey, RADIUS_PRESETS_KM,
};
use crate::services::{GeocodeClient, GeocodeOutcome, JobStoreClient};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub jobstore: Arc<JobStoreClient>,
    pub geocoder: Arc<GeocodeClient>,
    pub engine: DiscoveryEngine,
}

/// Configure all job-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/jobs/discover", web::post().to(discover_jobs))
        .route("/geocode", web::post().to(geocode_location));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Discover jobs endpoint
///
/// POST /api/v1/jobs/discover
///
/// Request body:
/// ```json
/// {
///   "search": "string",
///   "location": "string",
///   "category": "All Jobs",
///   "radiusKm": 10,
///   "sortBy": "recent|pay|distance",
///   "userLocation": {"latitude": 0.0, "longitude": 0.0}
/// }
/// ```
async fn discover_jobs(
    state: web::Data<AppState>,
    req: web::Json<DiscoverJobsRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for discover request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    if let Some(radius) = req.radius_km {
        if !RADIUS_PRESETS_KM.contains(&radius) {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid radius".to_string(),
                message: format!("radiusKm must be one of {:?}", RADIUS_PRESETS_KM),
                status_code: 400,
            });
        }
    }

    // The distance sort is only offered once a position is known; the
    // comparator itself stays unaware of this rule
    if req.sort_by == SortKey::Distance && req.user_location.is_none() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Distance sort unavailable".to_string(),
            message: "distance sort requires a known user location".to_string(),
            status_code: 400,
        });
    }

    tracing::info!(
        "Discovering jobs: category={:?}, sort={:?}, radius={:?}",
        req.category,
        req.sort_by,
        req.radius_km
    );

    let jobs = match state.jobstore.fetch_jobs().await {
        Ok(jobs) => jobs,
        Err(e) => {
            tracing::error!("Failed to fetch jobs: {}", e);
            return HttpResponse::BadGateway().json(ErrorResponse {
                error: "Failed to load jobs".to_string(),
                message: e.to_string(),
                status_code: 502,
            });
        }
    };

    let criteria = FilterCriteria {
        search: req.search.clone(),
        location: req.location.clone(),
        category: req.category,
        radius_km: req.radius_km,
        sort_by: req.sort_by,
    };

    let result = state.engine.run(jobs, &criteria, req.user_location);

    tracing::info!(
        "Returning {} jobs (from {} fetched)",
        result.jobs.len(),
        result.total_jobs
    );

    HttpResponse::Ok().json(DiscoverJobsResponse {
        jobs: result.jobs,
        total_jobs: result.total_jobs,
    })
}

/// Geocode endpoint backing the per-job map view
///
/// POST /api/v1/geocode
///
/// Always answers 200 with the envelope the map expects: coordinates on
/// success, nulls plus a message when the location cannot be placed.
async fn geocode_location(
    state: web::Data<AppState>,
    req: web::Json<GeocodeRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    match state.geocoder.geocode(&req.location).await {
        Ok(GeocodeOutcome::Found(coords)) => HttpResponse::Ok().json(GeocodeResponse {
            latitude: Some(coords.latitude),
            longitude: Some(coords.longitude),
            error: None,
        }),
        Ok(GeocodeOutcome::NotFound) => {
            tracing::debug!("No geocoding match for: {}", req.location);
            HttpResponse::Ok().json(GeocodeResponse {
                latitude: None,
                longitude: None,
                error: Some("Location not found".to_string()),
            })
        }
        Err(e) => {
            tracing::error!("Geocoding request failed: {}", e);
            HttpResponse::Ok().json(GeocodeResponse {
                latitude: None,
                longitude: None,
                error: Some("Geocoding service unavailable".to_string()),
            })
        }
    }
}
