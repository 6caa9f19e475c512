// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! View controller: keeps the page in step with the activities API.
//!
//! The controller holds no page or network state of its own. Every entry point
//! takes the page handle and the API handle as parameters, and every flow ends
//! in a full re-render from a fresh listing rather than patching the page.

use crate::config::Config;
use crate::services::{ActivitiesApi, SignupOutcome};
use crate::view::render::{render_activities, render_load_failure};
use crate::view::{MessageKind, PageHandle, UnregisterTarget};
use std::time::Duration;

/// Shown when a signup request fails before the server answers.
pub const SIGNUP_FAILED_TEXT: &str = "Failed to sign up. Please try again.";

/// Shown when the server rejects a signup without a usable detail.
pub const SIGNUP_REJECTED_FALLBACK: &str = "An error occurred";

/// Something the user (or the page lifecycle) did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Page finished loading.
    Load,
    /// Re-fetch and re-render on demand.
    Refresh,
    /// Signup form submitted.
    Submit,
    /// A participant's delete affordance was clicked.
    DeleteClicked(UnregisterTarget),
}

#[derive(Debug, Clone)]
pub struct ViewController {
    message_hide_delay: Duration,
}

impl Default for ViewController {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl ViewController {
    pub fn new(message_hide_delay: Duration) -> Self {
        Self { message_hide_delay }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.message_hide_delay)
    }

    pub fn message_hide_delay(&self) -> Duration {
        self.message_hide_delay
    }

    /// Route one event to its flow.
    pub async fn dispatch<A>(&self, event: Event, page: &PageHandle, api: &A)
    where
        A: ActivitiesApi + ?Sized,
    {
        match event {
            Event::Load => self.bootstrap(page, api).await,
            Event::Refresh => {
                self.refresh(page, api).await;
            }
            Event::Submit => self.submit_signup(page, api).await,
            Event::DeleteClicked(target) => self.unregister(page, api, &target).await,
        }
    }

    /// Initial render followed by an extra affordance pass.
    pub async fn bootstrap<A>(&self, page: &PageHandle, api: &A)
    where
        A: ActivitiesApi + ?Sized,
    {
        self.refresh(page, api).await;
        self.bind_delete_affordances(page);
    }

    /// Fetch the listing and rebuild the page from it.
    ///
    /// Returns false if the listing could not be fetched, in which case the
    /// list shows the load failure notice and the select is left alone.
    pub async fn refresh<A>(&self, page: &PageHandle, api: &A) -> bool
    where
        A: ActivitiesApi + ?Sized,
    {
        match api.list_activities().await {
            Ok(activities) => {
                page.with(|p| render_activities(p, &activities));
                tracing::debug!(count = activities.len(), "Rendered activities");
                self.bind_delete_affordances(page);
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "Error fetching activities");
                page.with(render_load_failure);
                false
            }
        }
    }

    /// Attach a delete affordance to every participant row lacking one.
    ///
    /// Rows that already carry an affordance are skipped, so repeated passes
    /// never stack a second one. Returns the number attached.
    pub fn bind_delete_affordances(&self, page: &PageHandle) -> usize {
        let attached = page.with(|p| {
            p.list
                .participant_items_mut()
                .map(|item| item.attach_delete_affordance())
                .filter(|attached| *attached)
                .count()
        });
        if attached > 0 {
            tracing::debug!(attached, "Attached delete affordances");
        }
        attached
    }

    /// Submit the signup form.
    pub async fn submit_signup<A>(&self, page: &PageHandle, api: &A)
    where
        A: ActivitiesApi + ?Sized,
    {
        let (email, activity) = page.with(|p| (p.email.clone(), p.select.value().to_string()));

        match api.signup(&activity, &email).await {
            Ok(SignupOutcome::Accepted { message }) => {
                tracing::info!(activity = %activity, "Signup accepted");
                page.with(|p| {
                    p.message.show(MessageKind::Success, message);
                    p.reset_form();
                });
                self.refresh(page, api).await;
            }
            Ok(SignupOutcome::Rejected { status, detail }) => {
                tracing::warn!(activity = %activity, status, "Signup rejected");
                let text = detail
                    .filter(|d| !d.is_empty())
                    .unwrap_or_else(|| SIGNUP_REJECTED_FALLBACK.to_string());
                page.with(|p| p.message.show(MessageKind::Error, text));
            }
            Err(err) => {
                tracing::error!(activity = %activity, error = %err, "Error signing up");
                page.with(|p| p.message.show(MessageKind::Error, SIGNUP_FAILED_TEXT));
            }
        }

        self.schedule_message_hide(page);
    }

    /// Remove a participant and re-render on success.
    ///
    /// Failures are only logged; the page stays as it was until the next refresh.
    pub async fn unregister<A>(&self, page: &PageHandle, api: &A, target: &UnregisterTarget)
    where
        A: ActivitiesApi + ?Sized,
    {
        match api.unregister(&target.activity, &target.email).await {
            Ok(()) => {
                tracing::info!(activity = %target.activity, "Participant unregistered");
                self.refresh(page, api).await;
            }
            Err(err) => {
                tracing::error!(
                    activity = %target.activity,
                    error = %err,
                    "Failed to unregister participant"
                );
            }
        }
    }

    /// Hide the message after the configured delay.
    ///
    /// Earlier pending hides are not cancelled; a later message may therefore
    /// be hidden early by an older timer.
    fn schedule_message_hide(&self, page: &PageHandle) {
        let page = page.clone();
        let delay = self.message_hide_delay();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            page.with(|p| p.message.hide());
        });
    }
}
