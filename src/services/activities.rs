// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activities API client.
//!
//! Handles:
//! - Listing all activities
//! - Signing a participant up for an activity
//! - Removing a participant from an activity

use crate::error::{ApiError, Result};
use crate::models::ActivityCollection;
use async_trait::async_trait;
use serde::Deserialize;

/// Handle to the remote source of activity state.
///
/// The view controller only talks to the server through this trait, so tests
/// can swap in a scripted implementation.
#[async_trait]
pub trait ActivitiesApi: Send + Sync {
    /// Fetch the full activity listing.
    async fn list_activities(&self) -> Result<ActivityCollection>;

    /// Register `email` for `activity`.
    ///
    /// A non-success status with a JSON body is an application-level answer
    /// and comes back as [`SignupOutcome::Rejected`], not as an error.
    async fn signup(&self, activity: &str, email: &str) -> Result<SignupOutcome>;

    /// Remove `email` from `activity`.
    async fn unregister(&self, activity: &str, email: &str) -> Result<()>;
}

/// Server answer to a signup request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupOutcome {
    /// 2xx with the server's confirmation text.
    Accepted { message: String },
    /// Non-2xx; `detail` is the server's explanation when it sent a string.
    Rejected { status: u16, detail: Option<String> },
}

/// JSON body of a signup response, success or failure.
#[derive(Debug, Deserialize)]
struct SignupBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// Path of the signup endpoint, percent-encoded.
pub fn signup_path(activity: &str, email: &str) -> String {
    format!(
        "/activities/{}/signup?email={}",
        urlencoding::encode(activity),
        urlencoding::encode(email)
    )
}

/// Path of the unregister endpoint, percent-encoded.
pub fn unregister_path(activity: &str, email: &str) -> String {
    format!(
        "/activities/{}/unregister?email={}",
        urlencoding::encode(activity),
        urlencoding::encode(email)
    )
}

/// HTTP client for the activities API.
#[derive(Clone)]
pub struct ActivitiesClient {
    http: reqwest::Client,
    base_url: String,
}

impl ActivitiesClient {
    /// Create a client for the API rooted at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl ActivitiesApi for ActivitiesClient {
    async fn list_activities(&self) -> Result<ActivityCollection> {
        let url = self.url("/activities");
        tracing::debug!(url = %url, "Fetching activities");

        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<SignupOutcome> {
        let url = self.url(&signup_path(activity, email));
        tracing::debug!(activity = %activity, "Submitting signup");

        let response = self.http.post(&url).send().await?;
        let status = response.status();

        let body: SignupBody = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        if status.is_success() {
            return Ok(SignupOutcome::Accepted {
                message: body.message.unwrap_or_default(),
            });
        }

        // FastAPI validation errors carry a list here; only plain strings are shown.
        let detail = match body.detail {
            Some(serde_json::Value::String(detail)) => Some(detail),
            _ => None,
        };

        Ok(SignupOutcome::Rejected {
            status: status.as_u16(),
            detail,
        })
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<()> {
        let url = self.url(&unregister_path(activity, email));
        tracing::debug!(activity = %activity, "Submitting unregister");

        let response = self.http.delete(&url).send().await?;

        if response.status().is_success() {
            return Ok(());
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }
}
