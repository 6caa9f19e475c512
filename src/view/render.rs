// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Rebuild the list container and activity select from a listing.

use super::page::{ActivityCard, Page, ParticipantItem, SELECT_PLACEHOLDER_LABEL};
use crate::models::{Activity, ActivityCollection};

/// Shown in the list container when the listing cannot be fetched.
pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";

/// Replace the list and the select options with `activities`.
///
/// Previous content is discarded wholesale; no diffing against what was
/// rendered before. Delete affordances are not attached here.
pub fn render_activities(page: &mut Page, activities: &ActivityCollection) {
    page.list.clear();
    page.select.clear();
    page.select.push_option("", SELECT_PLACEHOLDER_LABEL);

    for (name, activity) in activities.iter() {
        page.list.push_card(build_card(name, activity));
        page.select.push_option(name, name);
    }
}

/// Put the load failure notice in place of the list. The select is left as is.
pub fn render_load_failure(page: &mut Page) {
    page.list.show_notice(LOAD_FAILED_TEXT);
}

fn build_card(name: &str, activity: &Activity) -> ActivityCard {
    ActivityCard {
        name: name.to_string(),
        description: activity.description.clone(),
        schedule: activity.schedule.clone(),
        spots_left: activity.spots_left(),
        participants: activity
            .participants
            .iter()
            .map(|email| ParticipantItem::new(email.as_str(), name))
            .collect(),
    }
}
