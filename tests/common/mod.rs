// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use activity_board::error::{ApiError, Result};
use activity_board::models::{Activity, ActivityCollection};
use activity_board::services::{ActivitiesApi, SignupOutcome};
use async_trait::async_trait;
use axum::{
    extract::{Path, Query, State},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// Build an activity with a fixed description and schedule.
#[allow(dead_code)]
pub fn activity(max_participants: u32, participants: &[&str]) -> Activity {
    Activity {
        description: "d".to_string(),
        schedule: "Mon".to_string(),
        max_participants,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

/// The single-activity listing used throughout the scenarios.
#[allow(dead_code)]
pub fn chess_club() -> ActivityCollection {
    let mut activities = ActivityCollection::new();
    activities.insert("Chess Club", activity(2, &["a@x.com"]));
    activities
}

/// Shared state of the mock activities server.
#[allow(dead_code)]
#[derive(Default)]
pub struct MockApiState {
    pub activities: Mutex<ActivityCollection>,
    /// "METHOD /path?query" exactly as received
    pub requests: Mutex<Vec<String>>,
    /// Answer `GET /activities` with a 500
    pub listing_broken: AtomicBool,
    /// Answer unregister requests with a 500
    pub unregister_broken: AtomicBool,
    /// Canned status and raw body for every signup request
    pub signup_reply: Mutex<Option<(u16, String)>>,
}

impl MockApiState {
    #[allow(dead_code)]
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    #[allow(dead_code)]
    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }

    #[allow(dead_code)]
    pub fn break_listing(&self, broken: bool) {
        self.listing_broken.store(broken, Ordering::SeqCst);
    }

    #[allow(dead_code)]
    pub fn break_unregister(&self, broken: bool) {
        self.unregister_broken.store(broken, Ordering::SeqCst);
    }

    #[allow(dead_code)]
    pub fn reply_to_signups(&self, status: u16, body: &str) {
        *self.signup_reply.lock().unwrap() = Some((status, body.to_string()));
    }

    fn record(&self, method: &Method, uri: &Uri) {
        let target = uri
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| uri.path().to_string());
        self.requests
            .lock()
            .unwrap()
            .push(format!("{method} {target}"));
    }
}

#[derive(Deserialize)]
struct EmailQuery {
    email: String,
}

fn detail(status: StatusCode, detail: &str) -> Response {
    (status, Json(serde_json::json!({ "detail": detail }))).into_response()
}

async fn list_activities(
    State(state): State<Arc<MockApiState>>,
    method: Method,
    uri: Uri,
) -> Response {
    state.record(&method, &uri);
    if state.listing_broken.load(Ordering::SeqCst) {
        return detail(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error");
    }

    let activities = state.activities.lock().unwrap();
    let body: serde_json::Map<String, serde_json::Value> = activities
        .iter()
        .map(|(name, activity)| {
            (
                name.to_string(),
                serde_json::to_value(activity).expect("activity serializes"),
            )
        })
        .collect();
    Json(serde_json::Value::Object(body)).into_response()
}

async fn signup(
    State(state): State<Arc<MockApiState>>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
    method: Method,
    uri: Uri,
) -> Response {
    state.record(&method, &uri);
    if let Some((status, body)) = state.signup_reply.lock().unwrap().clone() {
        let status = StatusCode::from_u16(status).expect("valid status");
        return (status, body).into_response();
    }

    let mut activities = state.activities.lock().unwrap();
    let Some(existing) = activities.get(&name).cloned() else {
        return detail(StatusCode::NOT_FOUND, "Activity not found");
    };
    if existing.participants.contains(&query.email) {
        return detail(StatusCode::BAD_REQUEST, "Student is already signed up");
    }

    let mut updated = existing;
    updated.participants.push(query.email.clone());
    activities.insert(name.clone(), updated);

    Json(serde_json::json!({
        "message": format!("Signed up {} for {}", query.email, name)
    }))
    .into_response()
}

async fn unregister(
    State(state): State<Arc<MockApiState>>,
    Path(name): Path<String>,
    Query(query): Query<EmailQuery>,
    method: Method,
    uri: Uri,
) -> Response {
    state.record(&method, &uri);
    if state.unregister_broken.load(Ordering::SeqCst) {
        return detail(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error");
    }

    let mut activities = state.activities.lock().unwrap();
    let Some(existing) = activities.get(&name).cloned() else {
        return detail(StatusCode::NOT_FOUND, "Activity not found");
    };
    if !existing.participants.contains(&query.email) {
        return detail(StatusCode::BAD_REQUEST, "Student is not signed up");
    }

    let mut updated = existing;
    updated.participants.retain(|p| *p != query.email);
    activities.insert(name.clone(), updated);

    Json(serde_json::json!({
        "message": format!("Unregistered {} from {}", query.email, name)
    }))
    .into_response()
}

/// Start the mock activities API on an ephemeral port.
/// Returns the base URL and the shared state.
#[allow(dead_code)]
pub async fn spawn_mock_api(activities: ActivityCollection) -> (String, Arc<MockApiState>) {
    let state = Arc::new(MockApiState {
        activities: Mutex::new(activities),
        ..Default::default()
    });

    let app = Router::new()
        .route("/activities", get(list_activities))
        .route("/activities/{name}/signup", post(signup))
        .route("/activities/{name}/unregister", delete(unregister))
        .with_state(state.clone());

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock api");
    let addr = listener.local_addr().expect("mock api address");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    (format!("http://{addr}"), state)
}

/// Scripted in-memory API for flows that must not touch the network.
#[allow(dead_code)]
#[derive(Default)]
pub struct StubApi {
    pub listings: Mutex<VecDeque<Result<ActivityCollection>>>,
    pub signups: Mutex<VecDeque<Result<SignupOutcome>>>,
    pub unregisters: Mutex<VecDeque<Result<()>>>,
    /// Calls in order, e.g. "list", "signup Chess Club a@x.com"
    pub calls: Mutex<Vec<String>>,
}

impl StubApi {
    #[allow(dead_code)]
    pub fn with_listing(self, listing: Result<ActivityCollection>) -> Self {
        self.listings.lock().unwrap().push_back(listing);
        self
    }

    #[allow(dead_code)]
    pub fn with_signup(self, outcome: Result<SignupOutcome>) -> Self {
        self.signups.lock().unwrap().push_back(outcome);
        self
    }

    #[allow(dead_code)]
    pub fn with_unregister(self, outcome: Result<()>) -> Self {
        self.unregisters.lock().unwrap().push_back(outcome);
        self
    }

    #[allow(dead_code)]
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[allow(dead_code)]
fn exhausted(what: &str) -> ApiError {
    ApiError::Transport(format!("stub has no scripted {what} response"))
}

#[async_trait]
impl ActivitiesApi for StubApi {
    async fn list_activities(&self) -> Result<ActivityCollection> {
        self.calls.lock().unwrap().push("list".to_string());
        self.listings
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(exhausted("listing")))
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<SignupOutcome> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("signup {activity} {email}"));
        self.signups
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(exhausted("signup")))
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("unregister {activity} {email}"));
        self.unregisters
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(exhausted("unregister")))
    }
}
