use crate::models::Job;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when reading from the job store
#[derive(Debug, Error)]
pub enum JobStoreError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Read client for the hosted job store's REST interface
///
/// The store owns all persistence (jobs, applications, profiles) and the
/// geocoding of job rows; this service only ever reads the `jobs` table.
pub struct JobStoreClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl JobStoreClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            client,
        }
    }

    /// Fetch the full job list, newest first
    ///
    /// No pagination: the discovery engine works over the complete
    /// in-memory list. Rows that fail to deserialize are skipped with a
    /// warning rather than failing the whole fetch.
    pub async fn fetch_jobs(&self) -> Result<Vec<Job>, JobStoreError> {
        let url = format!(
            "{}/rest/v1/jobs?select=*&order=created_at.desc",
            self.base_url.trim_end_matches('/'),
        );

        tracing::debug!("Fetching jobs from: {}", url);

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(JobStoreError::ApiError(format!(
                "Failed to fetch jobs: {}",
                response.status()
            )));
        }

        let payload: Value = response.json().await?;

        let rows = payload
            .as_array()
            .ok_or_else(|| JobStoreError::InvalidResponse("Expected a JSON array of jobs".into()))?;

        let jobs: Vec<Job> = rows
            .iter()
            .filter_map(|row| match serde_json::from_value(row.clone()) {
                Ok(job) => Some(job),
                Err(e) => {
                    tracing::warn!("Skipping unparsable job row: {}", e);
                    None
                }
            })
            .collect();

        tracing::debug!("Fetched {} jobs (of {} rows)", jobs.len(), rows.len());

        Ok(jobs)
    }
}
