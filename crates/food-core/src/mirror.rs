//! Local Mirror of Server State
//!
//! An id-keyed, insertion-ordered map that the dashboard patches from
//! command results instead of re-fetching the collection.
//!
//! Every change goes through [`Mirror::apply`] with a [`MirrorEvent`].
//! Removed ids are remembered as tombstones, so a response that resolves
//! after the delete of the same id cannot bring the record back.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::domain::{Entity, FoodPlate};

/// A reconciliation step produced by a successful remote call
#[derive(Debug, Clone, PartialEq)]
pub enum MirrorEvent<T: Entity> {
    /// Full collection from the initial read
    Loaded(Vec<T>),
    /// A newly created record
    Added(T),
    /// The server's echo of a replaced record
    Replaced(T),
    /// A record the server confirmed deleted
    Removed(T::Id),
}

/// Event type for the food collection
pub type FoodEvent = MirrorEvent<FoodPlate>;

/// Mirror of the food collection
pub type FoodMirror = Mirror<FoodPlate>;

#[derive(Debug, Clone, PartialEq)]
pub struct Mirror<T: Entity> {
    /// Records keyed by insertion sequence
    entries: BTreeMap<u64, T>,
    /// id -> insertion sequence
    index: HashMap<T::Id, u64>,
    tombstones: HashSet<T::Id>,
    next_seq: u64,
}

impl<T: Entity> Default for Mirror<T> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
            index: HashMap::new(),
            tombstones: HashSet::new(),
            next_seq: 0,
        }
    }
}

impl<T: Entity> Mirror<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event. Returns whether the visible collection changed.
    pub fn apply(&mut self, event: MirrorEvent<T>) -> bool {
        match event {
            MirrorEvent::Loaded(records) => {
                self.entries.clear();
                self.index.clear();
                for record in records {
                    self.upsert(record);
                }
                true
            }
            MirrorEvent::Added(record) => self.upsert(record),
            MirrorEvent::Replaced(record) => self.replace(record),
            MirrorEvent::Removed(id) => self.remove(id),
        }
    }

    /// Append, or overwrite in place when the id is already present
    fn upsert(&mut self, record: T) -> bool {
        let id = record.id();
        if self.tombstones.contains(&id) {
            log::debug!("[MIRROR] ignoring {:?}: already removed", id);
            return false;
        }
        match self.index.get(&id) {
            Some(seq) => {
                self.entries.insert(*seq, record);
            }
            None => {
                let seq = self.next_seq;
                self.next_seq += 1;
                self.index.insert(id, seq);
                self.entries.insert(seq, record);
            }
        }
        true
    }

    fn replace(&mut self, record: T) -> bool {
        let Some(seq) = self.index.get(&record.id()) else {
            log::debug!("[MIRROR] replace of unknown id {:?} ignored", record.id());
            return false;
        };
        self.entries.insert(*seq, record);
        true
    }

    fn remove(&mut self, id: T::Id) -> bool {
        self.tombstones.insert(id);
        match self.index.remove(&id) {
            Some(seq) => self.entries.remove(&seq).is_some(),
            None => false,
        }
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.index.get(&id).and_then(|seq| self.entries.get(seq))
    }

    pub fn contains(&self, id: T::Id) -> bool {
        self.index.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}
