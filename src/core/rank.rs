use std::cmp::Ordering;

use crate::models::{JobView, SortKey};

/// Best-effort numeric wage extracted from employer-entered free text
///
/// Takes the first run of ASCII digits: "$40-45/hour" reads as 40, and text
/// with no digits at all ("Contact for rate") reads as 0. Anything beyond
/// "first match wins" is deliberately left undefined.
pub fn wage_amount(wage: &str) -> u64 {
    wage.chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .fold(0u64, |amount, digit| {
            amount
                .saturating_mul(10)
                .saturating_add(u64::from(digit as u8 - b'0'))
        })
}

/// Distance comparator: ascending, with every unknown distance ordered
/// after every known one. A NaN distance counts as unknown.
#[inline]
pub fn compare_distance(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (known(a), known(b)) {
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[inline]
fn known(distance: Option<f64>) -> Option<f64> {
    distance.filter(|d| !d.is_nan())
}

/// Order the filtered jobs by the selected sort key
///
/// The sort is stable: jobs with equal keys keep their relative order from
/// the input (the store's newest-first order).
pub fn rank(jobs: &mut [JobView], key: SortKey) {
    match key {
        SortKey::Recent => {
            jobs.sort_by(|a, b| b.job.created_at.cmp(&a.job.created_at));
        }
        SortKey::Pay => {
            jobs.sort_by(|a, b| wage_amount(&b.job.wage).cmp(&wage_amount(&a.job.wage)));
        }
        SortKey::Distance => {
            jobs.sort_by(|a, b| compare_distance(a.distance_km, b.distance_km));
        }
    }
}
