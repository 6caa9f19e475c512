// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory document the board renders into.
//!
//! `Page` mirrors the DOM surface of the sign-up page: the activities list
//! container, the activity `<select>`, the signup form's email field and the
//! message element. Values are stored raw, the way a DOM stores text nodes and
//! attributes; escaping happens when markup is produced.

use super::escape::escape_html;
use std::fmt::Write;

/// Shown in the list container before the first fetch completes.
pub const LOADING_TEXT: &str = "Loading activities...";

/// Shown in place of the participant list when an activity has none.
pub const EMPTY_PARTICIPANTS_TEXT: &str = "No participants yet.";

/// Label of the empty-valued first option of the activity select.
pub const SELECT_PLACEHOLDER_LABEL: &str = "-- Select an activity --";

/// Trash can glyph of a delete affordance.
pub const DELETE_ICON: &str = "🗑️";

/// Which participant a delete affordance removes, from which activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnregisterTarget {
    pub email: String,
    pub activity: String,
}

/// Clickable icon attached to a participant row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteAffordance {
    target: UnregisterTarget,
}

impl DeleteAffordance {
    pub fn new(target: UnregisterTarget) -> Self {
        Self { target }
    }

    /// The email and activity recorded when the affordance was attached.
    pub fn target(&self) -> &UnregisterTarget {
        &self.target
    }
}

/// One `<li>` of a participants list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantItem {
    /// `data-email`
    pub email: String,
    /// `data-activity`
    pub activity: String,
    delete: Option<DeleteAffordance>,
}

impl ParticipantItem {
    pub fn new(email: impl Into<String>, activity: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            activity: activity.into(),
            delete: None,
        }
    }

    pub fn delete_affordance(&self) -> Option<&DeleteAffordance> {
        self.delete.as_ref()
    }

    pub fn has_delete_affordance(&self) -> bool {
        self.delete.is_some()
    }

    /// Attach a delete affordance built from this item's data attributes.
    ///
    /// Returns false, leaving the item untouched, if one is already attached.
    pub fn attach_delete_affordance(&mut self) -> bool {
        if self.delete.is_some() {
            return false;
        }
        self.delete = Some(DeleteAffordance::new(UnregisterTarget {
            email: self.email.clone(),
            activity: self.activity.clone(),
        }));
        true
    }

    fn write_html(&self, out: &mut String) {
        let _ = write!(
            out,
            r#"<li data-email="{}" data-activity="{}">{}"#,
            escape_html(&self.email),
            escape_html(&self.activity),
            escape_html(&self.email)
        );
        if self.delete.is_some() {
            let _ = write!(
                out,
                r#"<span class="delete-icon" style="cursor: pointer;"> {DELETE_ICON}</span>"#
            );
        }
        out.push_str("</li>");
    }
}

/// One `.activity-card`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: Vec<ParticipantItem>,
}

impl ActivityCard {
    pub fn availability_text(&self) -> String {
        format!("{} spots left", self.spots_left)
    }

    fn write_html(&self, out: &mut String) {
        out.push_str(r#"<div class="activity-card">"#);
        let _ = write!(
            out,
            "<h4>{}</h4><p>{}</p><p><strong>Schedule:</strong> {}</p><p><strong>Availability:</strong> {}</p>",
            escape_html(&self.name),
            escape_html(&self.description),
            escape_html(&self.schedule),
            self.availability_text()
        );
        out.push_str(r#"<div class="participants-section"><h5 class="participants-title">Participants</h5>"#);
        if self.participants.is_empty() {
            let _ = write!(
                out,
                r#"<div class="participants-empty">{EMPTY_PARTICIPANTS_TEXT}</div>"#
            );
        } else {
            out.push_str(r#"<div class="participants-list"><ul>"#);
            for item in &self.participants {
                item.write_html(out);
            }
            out.push_str("</ul></div>");
        }
        out.push_str("</div></div>");
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ListContent {
    Notice(String),
    Cards(Vec<ActivityCard>),
}

/// The `#activities-list` container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivitiesList {
    content: ListContent,
}

impl Default for ActivitiesList {
    fn default() -> Self {
        Self {
            content: ListContent::Notice(LOADING_TEXT.to_string()),
        }
    }
}

impl ActivitiesList {
    /// Remove everything, leaving an empty container.
    pub fn clear(&mut self) {
        self.content = ListContent::Cards(Vec::new());
    }

    pub fn push_card(&mut self, card: ActivityCard) {
        match &mut self.content {
            ListContent::Cards(cards) => cards.push(card),
            ListContent::Notice(_) => self.content = ListContent::Cards(vec![card]),
        }
    }

    /// Replace the whole content with a single paragraph.
    pub fn show_notice(&mut self, text: impl Into<String>) {
        self.content = ListContent::Notice(text.into());
    }

    pub fn notice(&self) -> Option<&str> {
        match &self.content {
            ListContent::Notice(text) => Some(text),
            ListContent::Cards(_) => None,
        }
    }

    pub fn cards(&self) -> &[ActivityCard] {
        match &self.content {
            ListContent::Cards(cards) => cards,
            ListContent::Notice(_) => &[],
        }
    }

    pub fn card(&self, name: &str) -> Option<&ActivityCard> {
        self.cards().iter().find(|card| card.name == name)
    }

    /// Every participant row currently in the container, in document order.
    pub fn participant_items(&self) -> impl Iterator<Item = &ParticipantItem> {
        self.cards().iter().flat_map(|card| card.participants.iter())
    }

    pub fn participant_items_mut(&mut self) -> impl Iterator<Item = &mut ParticipantItem> {
        let cards: &mut [ActivityCard] = match &mut self.content {
            ListContent::Cards(cards) => cards,
            ListContent::Notice(_) => &mut [],
        };
        cards.iter_mut().flat_map(|card| card.participants.iter_mut())
    }

    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        match &self.content {
            ListContent::Notice(text) => {
                let _ = write!(out, "<p>{}</p>", escape_html(text));
            }
            ListContent::Cards(cards) => {
                for card in cards {
                    card.write_html(&mut out);
                }
            }
        }
        out
    }
}

/// One `<option>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// The `#activity` select, which doubles as the form's activity field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectControl {
    options: Vec<SelectOption>,
    selected: usize,
}

impl SelectControl {
    /// Drop all options, including the placeholder.
    pub fn clear(&mut self) {
        self.options.clear();
        self.selected = 0;
    }

    pub fn push_option(&mut self, value: impl Into<String>, label: impl Into<String>) {
        self.options.push(SelectOption {
            value: value.into(),
            label: label.into(),
        });
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn option_values(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.value.as_str()).collect()
    }

    /// Value of the selected option, or empty if there are no options.
    pub fn value(&self) -> &str {
        self.options
            .get(self.selected)
            .map(|o| o.value.as_str())
            .unwrap_or("")
    }

    /// Select the option with `value`. Unknown values leave the selection alone.
    pub fn select(&mut self, value: &str) -> bool {
        match self.options.iter().position(|o| o.value == value) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => false,
        }
    }

    /// Back to the first option.
    pub fn reset(&mut self) {
        self.selected = 0;
    }

    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        for (index, option) in self.options.iter().enumerate() {
            let selected = if index == self.selected && index != 0 {
                " selected"
            } else {
                ""
            };
            let _ = write!(
                out,
                r#"<option value="{}"{}>{}</option>"#,
                escape_html(&option.value),
                selected,
                escape_html(&option.label)
            );
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn class_name(self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

/// The `#message` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBox {
    text: String,
    kind: Option<MessageKind>,
    hidden: bool,
}

impl Default for MessageBox {
    fn default() -> Self {
        Self {
            text: String::new(),
            kind: None,
            hidden: true,
        }
    }
}

impl MessageBox {
    /// Overwrite text and style and make the message visible.
    pub fn show(&mut self, kind: MessageKind, text: impl Into<String>) {
        self.text = text.into();
        self.kind = Some(kind);
        self.hidden = false;
    }

    /// Hide the message. Hiding a hidden message is a no-op.
    pub fn hide(&mut self) {
        self.hidden = true;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> Option<MessageKind> {
        self.kind
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn is_visible(&self) -> bool {
        !self.hidden
    }

    pub fn class_name(&self) -> String {
        match (self.kind, self.hidden) {
            (Some(kind), true) => format!("{} hidden", kind.class_name()),
            (Some(kind), false) => kind.class_name().to_string(),
            (None, true) => "hidden".to_string(),
            (None, false) => String::new(),
        }
    }
}

/// The whole sign-up page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub list: ActivitiesList,
    pub select: SelectControl,
    /// Value of the form's `#email` input
    pub email: String,
    pub message: MessageBox,
}

impl Page {
    pub fn new() -> Self {
        let mut page = Self::default();
        page.select.push_option("", SELECT_PLACEHOLDER_LABEL);
        page
    }

    /// Reset the signup form: empty email, placeholder activity.
    pub fn reset_form(&mut self) {
        self.email.clear();
        self.select.reset();
    }

    /// Find the delete affordance on the row for `email` in `activity`.
    pub fn delete_affordance(&self, activity: &str, email: &str) -> Option<&DeleteAffordance> {
        self.list
            .participant_items()
            .filter(|item| item.activity == activity && item.email == email)
            .find_map(|item| item.delete_affordance())
    }

    /// Markup of the list container, form and message element.
    pub fn to_html(&self) -> String {
        format!(
            concat!(
                r#"<div id="activities-list">{}</div>"#,
                r#"<form id="signup-form"><input type="email" id="email" value="{}">"#,
                r#"<select id="activity">{}</select></form>"#,
                r#"<div id="message" class="{}">{}</div>"#
            ),
            self.list.inner_html(),
            escape_html(&self.email),
            self.select.inner_html(),
            self.message.class_name(),
            escape_html(self.message.text())
        )
    }
}
