//! Route table: route name → route entry.
//!
//! # Responsibilities
//! - Store route entries under unique names
//! - Preserve registration order for listing and serialization
//! - Name lookup for the generator
//!
//! # Design Decisions
//! - Written once by the collector, then frozen behind an `Arc`
//! - O(1) name lookup via HashMap index into an ordered Vec
//! - Re-registering a name replaces the entry in place

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;

use crate::routing::branch::RouteEntry;

/// Errors raised while building a route table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// A route entry must contain at least one branch.
    #[error("route entry has no branches")]
    EmptyEntry,
}

/// Ordered mapping of route names to their entries.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    entries: Vec<(String, RouteEntry)>,
    index: HashMap<String, usize>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entry for `name`.
    /// Returns the previous entry when the name was already present.
    pub fn insert(&mut self, name: impl Into<String>, entry: RouteEntry) -> Option<RouteEntry> {
        let name = name.into();
        if let Some(&idx) = self.index.get(&name) {
            return Some(std::mem::replace(&mut self.entries[idx].1, entry));
        }
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name, entry));
        None
    }

    pub fn get(&self, name: &str) -> Option<&RouteEntry> {
        self.index.get(name).map(|&idx| &self.entries[idx].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RouteEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
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

impl Serialize for RouteTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, entry) in &self.entries {
            map.serialize_entry(name, entry)?;
        }
        map.end()
    }
}
