//! Pan membership bookkeeping.

use crate::objects::ObjectId;

/// The set of objects currently resting on the pan.
///
/// Order is irrelevant to the mass computation but insertion order is kept.
/// Invariant: an object appears at most once.
#[derive(Debug, Default, Clone)]
pub struct PanContents {
    ids: Vec<ObjectId>,
}

impl PanContents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.ids.contains(&id)
    }

    /// Idempotent add; returns true if the object was newly placed.
    pub fn insert(&mut self, id: ObjectId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Remove by identity; returns true if the object was present.
    pub fn remove(&mut self, id: ObjectId) -> bool {
        match self.ids.iter().position(|&x| x == id) {
            Some(i) => {
                self.ids.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.ids.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
