use crate::models::{Category, FilterCriteria, Job};

/// Check if a job matches the selected category
///
/// The "All Jobs" sentinel matches everything; otherwise the job's category
/// tag must equal the selection, with a case-insensitive title-substring
/// fallback for jobs tagged free-form.
#[inline]
pub fn matches_category(job: &Job, category: Category) -> bool {
    if category == Category::AllJobs {
        return true;
    }

    job.category == category.label()
        || job
            .title
            .to_lowercase()
            .contains(&category.label().to_lowercase())
}

/// Check if a job matches the free-text search term
///
/// An empty term matches everything; otherwise the term must appear
/// case-insensitively in the title, company, description, or a skill tag.
#[inline]
pub fn matches_search(job: &Job, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    let term = term.to_lowercase();
    job.title.to_lowercase().contains(&term)
        || job.company.to_lowercase().contains(&term)
        || job.description.to_lowercase().contains(&term)
        || job.skills.iter().any(|skill| skill.to_lowercase().contains(&term))
}

/// Check if a job's location string contains the location filter
#[inline]
pub fn matches_location(job: &Job, filter: &str) -> bool {
    if filter.is_empty() {
        return true;
    }

    job.location.to_lowercase().contains(&filter.to_lowercase())
}

/// Check a computed distance against the radius bound
///
/// Unknown distance always passes: a job is never excluded for missing
/// coordinates. A NaN distance counts as unknown.
#[inline]
pub fn within_radius(distance_km: Option<f64>, bound_km: Option<f64>) -> bool {
    match (bound_km, distance_km) {
        (None, _) => true,
        (Some(_), None) => true,
        (Some(bound), Some(distance)) => distance.is_nan() || distance <= bound,
    }
}

/// Conjunction of all four listing filters
#[inline]
pub fn matches_criteria(job: &Job, distance_km: Option<f64>, criteria: &FilterCriteria) -> bool {
    matches_category(job, criteria.category)
        && matches_search(job, &criteria.search)
        && matches_location(job, &criteria.location)
        && within_radius(distance_km, criteria.radius_km)
}
