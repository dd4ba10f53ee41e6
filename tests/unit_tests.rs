// Unit tests for the discovery pipeline, driven through the public API

use chrono::{Duration, Utc};
use jobs_algo::core::{haversine_distance, rank, wage_amount, within_radius, DiscoveryEngine};
use jobs_algo::models::{Category, Coordinates, FilterCriteria, Job, JobView, SortKey};

const DELHI: Coordinates = Coordinates {
    latitude: 28.6139,
    longitude: 77.2090,
};

fn create_job(
    title: &str,
    wage: &str,
    coords: Option<(f64, f64)>,
    age_hours: i64,
) -> Job {
    Job {
        id: uuid::Uuid::new_v4(),
        title: title.to_string(),
        company: "BuildRight Contractors".to_string(),
        location: "Karol Bagh, Delhi".to_string(),
        category: "Construction-Related Work".to_string(),
        description: "Immediate start, tools provided".to_string(),
        skills: vec!["safety training".to_string()],
        wage: wage.to_string(),
        employment_type: "Full-time".to_string(),
        positions_available: 2,
        positions_filled: 0,
        latitude: coords.map(|c| c.0),
        longitude: coords.map(|c| c.1),
        created_at: Utc::now() - Duration::hours(age_hours),
    }
}

#[test]
fn test_distance_is_symmetric() {
    let a = (28.6139, 77.2090);
    let b = (19.0760, 72.8777);

    let forward = haversine_distance(a.0, a.1, b.0, b.1);
    let backward = haversine_distance(b.0, b.1, a.0, a.1);

    assert!((forward - backward).abs() < 1e-9);
}

#[test]
fn test_distance_to_self_is_zero() {
    assert_eq!(haversine_distance(28.6139, 77.2090, 28.6139, 77.2090), 0.0);
}

#[test]
fn test_empty_criteria_return_full_list() {
    let jobs = vec![
        create_job("Electrician", "$40/hour", Some((28.62, 77.21)), 1),
        create_job("Carpenter", "$35/hour", None, 2),
        create_job("Helper", "Negotiable", Some((28.70, 77.10)), 3),
    ];

    let result = DiscoveryEngine::new().run(jobs, &FilterCriteria::default(), None);

    assert_eq!(result.jobs.len(), 3);
}

#[test]
fn test_unknown_distance_survives_radius_filter() {
    let jobs = vec![create_job("Carpenter", "$35/hour", None, 0)];

    let criteria = FilterCriteria {
        radius_km: Some(5.0),
        ..Default::default()
    };

    let result = DiscoveryEngine::new().run(jobs, &criteria, Some(DELHI));

    assert_eq!(result.jobs.len(), 1);
    assert!(result.jobs[0].distance_km.is_none());
}

#[test]
fn test_within_radius_is_inclusive() {
    assert!(within_radius(Some(10.0), Some(10.0)));
    assert!(!within_radius(Some(10.001), Some(10.0)));
}

#[test]
fn test_distance_sort_places_unknown_after_known() {
    let jobs = vec![
        create_job("No coords A", "$30/hour", None, 1),
        create_job("Far", "$30/hour", Some((28.80, 77.40)), 2),
        create_job("No coords B", "$30/hour", None, 3),
        create_job("Near", "$30/hour", Some((28.62, 77.21)), 4),
    ];

    let criteria = FilterCriteria {
        sort_by: SortKey::Distance,
        ..Default::default()
    };

    let result = DiscoveryEngine::new().run(jobs, &criteria, Some(DELHI));
    let titles: Vec<&str> = result.jobs.iter().map(|v| v.job.title.as_str()).collect();

    assert_eq!(titles, vec!["Near", "Far", "No coords A", "No coords B"]);
}

#[test]
fn test_pay_sort_descending_with_negotiable_last() {
    let jobs = vec![
        create_job("A", "$40-45/hour", None, 1),
        create_job("B", "$35/hour", None, 2),
        create_job("C", "Negotiable", None, 3),
    ];

    let criteria = FilterCriteria {
        sort_by: SortKey::Pay,
        ..Default::default()
    };

    let result = DiscoveryEngine::new().run(jobs, &criteria, None);
    let wages: Vec<&str> = result.jobs.iter().map(|v| v.job.wage.as_str()).collect();

    assert_eq!(wages, vec!["$40-45/hour", "$35/hour", "Negotiable"]);
}

#[test]
fn test_wage_heuristic_takes_first_digit_run() {
    assert_eq!(wage_amount("$40-45/hour"), 40);
    assert_eq!(wage_amount("Contact for rate"), 0);
}

#[test]
fn test_radius_and_distance_sort_scenario() {
    // Electrician ~5km north of the caller; Carpenter has no coordinates
    let jobs = vec![
        create_job("Carpenter", "$35/hour", None, 1),
        create_job("Electrician", "$40/hour", Some((28.6584, 77.2090)), 2),
    ];

    let criteria = FilterCriteria {
        radius_km: Some(10.0),
        sort_by: SortKey::Distance,
        ..Default::default()
    };

    let result = DiscoveryEngine::new().run(jobs, &criteria, Some(DELHI));
    let titles: Vec<&str> = result.jobs.iter().map(|v| v.job.title.as_str()).collect();

    assert_eq!(titles, vec!["Electrician", "Carpenter"]);
    let electrician_km = result.jobs[0].distance_km.unwrap();
    assert!((electrician_km - 5.0).abs() < 0.5);
}

#[test]
fn test_search_matches_title_substring_case_insensitively() {
    let jobs = vec![
        create_job("Masonry Specialist", "$30/hour", None, 1),
        create_job("Driver", "$30/hour", None, 2),
    ];

    let criteria = FilterCriteria {
        category: Category::AllJobs,
        search: "mason".to_string(),
        ..Default::default()
    };

    let result = DiscoveryEngine::new().run(jobs, &criteria, None);

    assert_eq!(result.jobs.len(), 1);
    assert_eq!(result.jobs[0].job.title, "Masonry Specialist");
}

#[test]
fn test_rank_is_usable_standalone() {
    let mut views: Vec<JobView> = vec![
        JobView {
            job: create_job("far", "$10/hour", None, 0),
            distance_km: Some(12.0),
        },
        JobView {
            job: create_job("near", "$10/hour", None, 0),
            distance_km: Some(2.0),
        },
    ];

    rank(&mut views, SortKey::Distance);

    assert_eq!(views[0].job.title, "near");
}

#[test]
fn test_absent_location_keeps_distance_filtering_disabled() {
    let jobs = vec![
        create_job("Anywhere", "$30/hour", Some((10.0, 10.0)), 1),
        create_job("Elsewhere", "$30/hour", Some((50.0, 50.0)), 2),
    ];

    let criteria = FilterCriteria {
        radius_km: Some(5.0),
        ..Default::default()
    };

    // No caller position: all distances unknown, nothing excluded
    let result = DiscoveryEngine::new().run(jobs, &criteria, None);

    assert_eq!(result.jobs.len(), 2);
}
