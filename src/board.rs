// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Event loop glue: one page, one controller, one API handle.

use crate::config::Config;
use crate::controller::{Event, ViewController};
use crate::services::{ActivitiesApi, ActivitiesClient};
use crate::view::{Page, PageHandle};

/// A running sign-up board.
pub struct Board<A> {
    page: PageHandle,
    controller: ViewController,
    api: A,
}

impl Board<ActivitiesClient> {
    /// Board talking to the API named in `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            ActivitiesClient::new(config.api_url.clone()),
            ViewController::from_config(config),
        )
    }
}

impl<A: ActivitiesApi> Board<A> {
    pub fn new(api: A, controller: ViewController) -> Self {
        Self {
            page: PageHandle::new(Page::new()),
            controller,
            api,
        }
    }

    pub fn page(&self) -> &PageHandle {
        &self.page
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Hand one event to the controller and wait for its flow to finish.
    pub async fn dispatch(&self, event: Event) {
        tracing::debug!(?event, "Dispatching event");
        self.controller.dispatch(event, &self.page, &self.api).await;
    }

    /// Fire the page load event.
    pub async fn start(&self) {
        self.dispatch(Event::Load).await;
    }

    /// Type into the email field.
    pub fn fill_email(&self, email: &str) {
        self.page.with(|p| p.email = email.to_string());
    }

    /// Pick an activity in the select. Returns false if no such option exists.
    pub fn choose_activity(&self, activity: &str) -> bool {
        self.page.with(|p| p.select.select(activity))
    }

    /// Fill in and submit the signup form.
    ///
    /// Returns false without submitting if `activity` is not offered in the
    /// select; the form would otherwise go out with a stale selection.
    pub async fn sign_up(&self, email: &str, activity: &str) -> bool {
        self.fill_email(email);
        if !self.choose_activity(activity) {
            tracing::warn!(activity = %activity, "Activity not offered in select");
            return false;
        }
        self.dispatch(Event::Submit).await;
        true
    }

    /// Whether `email` currently has a row under `activity`.
    pub fn is_listed(&self, activity: &str, email: &str) -> bool {
        self.page.with(|p| {
            p.list
                .card(activity)
                .is_some_and(|card| card.participants.iter().any(|item| item.email == email))
        })
    }

    /// Click the delete affordance on `email`'s row in `activity`.
    ///
    /// Returns false if no such row carries an affordance.
    pub async fn click_delete(&self, activity: &str, email: &str) -> bool {
        let target = self.page.with(|p| {
            p.delete_affordance(activity, email)
                .map(|affordance| affordance.target().clone())
        });

        match target {
            Some(target) => {
                self.dispatch(Event::DeleteClicked(target)).await;
                true
            }
            None => false,
        }
    }
}
