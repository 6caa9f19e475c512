// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity model as served by `GET /activities`.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;

/// One activity on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Free-form description
    pub description: String,
    /// Human readable schedule ("Fridays, 3:30 PM - 5:00 PM")
    pub schedule: String,
    /// Capacity of the activity
    pub max_participants: u32,
    /// Participant emails in server order
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Capacity minus current roster size.
    ///
    /// Not clamped: an over-full roster yields a negative number.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }
}

/// All activities from one listing, keyed by name, in payload order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityCollection {
    entries: Vec<(String, Activity)>,
    /// name -> position in `entries`
    index: HashMap<String, usize>,
}

impl ActivityCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an activity. A replaced entry keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, activity: Activity) {
        let name = name.into();
        match self.index.get(&name) {
            Some(&position) => self.entries[position].1 = activity,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, activity));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.index
            .get(name)
            .map(|&position| &self.entries[position].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries
            .iter()
            .map(|(name, activity)| (name.as_str(), activity))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Activity)> for ActivityCollection {
    fn from_iter<I: IntoIterator<Item = (String, Activity)>>(iter: I) -> Self {
        let mut collection = Self::new();
        for (name, activity) in iter {
            collection.insert(name, activity);
        }
        collection
    }
}

impl<'de> Deserialize<'de> for ActivityCollection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CollectionVisitor;

        impl<'de> Visitor<'de> for CollectionVisitor {
            type Value = ActivityCollection;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut map: M) -> Result<Self::Value, M::Error> {
                let mut collection = ActivityCollection::new();
                while let Some((name, activity)) = map.next_entry::<String, Activity>()? {
                    collection.insert(name, activity);
                }
                Ok(collection)
            }
        }

        deserializer.deserialize_map(CollectionVisitor)
    }
}
