// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The rendered sign-up page and the code that builds it.

pub mod escape;
pub mod page;
pub mod render;

pub use escape::escape_html;
pub use page::{
    ActivitiesList, ActivityCard, DeleteAffordance, MessageBox, MessageKind, Page,
    ParticipantItem, SelectControl, UnregisterTarget,
};

use std::sync::{Arc, Mutex, PoisonError};

/// Shared handle to the page.
///
/// The lock is only taken inside [`PageHandle::with`], which cannot span an
/// `.await`, so every page mutation runs to completion before another starts.
#[derive(Clone, Debug, Default)]
pub struct PageHandle(Arc<Mutex<Page>>);

impl PageHandle {
    pub fn new(page: Page) -> Self {
        Self(Arc::new(Mutex::new(page)))
    }

    /// Run `f` with exclusive access to the page.
    pub fn with<R>(&self, f: impl FnOnce(&mut Page) -> R) -> R {
        let mut page = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut page)
    }

    /// Copy of the current page state.
    pub fn snapshot(&self) -> Page {
        self.with(|page| page.clone())
    }
}
