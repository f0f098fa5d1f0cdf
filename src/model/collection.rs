// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Atelier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Atelier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Generic keyed entity collections and ordered id-list helpers.
//!
//! Collections are the only primitive through which entity slices of the app
//! state change. Entries are stored behind `Arc` so that cloning a snapshot
//! shares every untouched entity; `update_one` copies an entity on write.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// An addressable domain object stored by id in an [`EntityCollection`].
pub trait Entity {
    type Id: Clone + Ord + fmt::Debug;

    fn id(&self) -> &Self::Id;
}

/// Keyed collection of entities with last-write-wins insertion.
///
/// Absence is represented, never signaled: looking up, updating, or removing
/// an id that is not present is a silent no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityCollection<T: Entity> {
    entities: BTreeMap<T::Id, Arc<T>>,
}

impl<T: Entity> Default for EntityCollection<T> {
    fn default() -> Self {
        Self {
            entities: BTreeMap::new(),
        }
    }
}

impl<T: Entity + Clone> EntityCollection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entities(entities: impl IntoIterator<Item = T>) -> Self {
        let mut collection = Self::new();
        collection.add_many(entities);
        collection
    }

    pub fn get_one(&self, id: &T::Id) -> Option<&T> {
        self.entities.get(id).map(Arc::as_ref)
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.entities.contains_key(id)
    }

    /// Inserts an entity; an existing entry under the same id is overwritten.
    pub fn add_one(&mut self, entity: T) {
        self.entities.insert(entity.id().clone(), Arc::new(entity));
    }

    pub fn add_many(&mut self, entities: impl IntoIterator<Item = T>) {
        for entity in entities {
            self.add_one(entity);
        }
    }

    /// Applies `changes` to the entity under `id`.
    ///
    /// Returns `false` (and leaves the collection untouched) if the id is
    /// absent. The entry is copied on write, so other snapshots sharing the
    /// entity are unaffected.
    pub fn update_one(&mut self, id: &T::Id, changes: impl FnOnce(&mut T)) -> bool {
        match self.entities.get_mut(id) {
            Some(slot) => {
                changes(Arc::make_mut(slot));
                true
            }
            None => false,
        }
    }

    /// Removes all present ids, ignoring absent ones.
    pub fn remove_many<'a>(&mut self, ids: impl IntoIterator<Item = &'a T::Id>)
    where
        T::Id: 'a,
    {
        for id in ids {
            self.entities.remove(id);
        }
    }

    pub fn ids(&self) -> impl Iterator<Item = &T::Id> {
        self.entities.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entities.values().map(Arc::as_ref)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// Position of `id` on an ordered id list, if present.
pub fn id_index_on_list<I: PartialEq>(list: &[I], id: &I) -> Option<usize> {
    list.iter().position(|candidate| candidate == id)
}

#[cfg(test)]
mod tests {
    use super::{id_index_on_list, Entity, EntityCollection};

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Item {
        id: String,
        value: u32,
    }

    impl Entity for Item {
        type Id = String;

        fn id(&self) -> &Self::Id {
            &self.id
        }
    }

    fn item(id: &str, value: u32) -> Item {
        Item {
            id: id.to_owned(),
            value,
        }
    }

    #[test]
    fn add_one_overwrites_existing_entry() {
        let mut collection = EntityCollection::new();
        collection.add_one(item("a", 1));
        collection.add_one(item("a", 2));

        assert_eq!(collection.len(), 1);
        assert_eq!(collection.get_one(&"a".to_owned()), Some(&item("a", 2)));
    }

    #[test]
    fn update_one_merges_changes_onto_existing_entity() {
        let mut collection = EntityCollection::from_entities([item("a", 1)]);

        let updated = collection.update_one(&"a".to_owned(), |entry| entry.value = 9);

        assert!(updated);
        assert_eq!(collection.get_one(&"a".to_owned()), Some(&item("a", 9)));
    }

    #[test]
    fn update_one_is_a_no_op_for_absent_id() {
        let mut collection = EntityCollection::from_entities([item("a", 1)]);
        let before = collection.clone();

        let updated = collection.update_one(&"missing".to_owned(), |entry| entry.value = 9);

        assert!(!updated);
        assert_eq!(collection, before);
    }

    #[test]
    fn update_one_does_not_touch_shared_snapshots() {
        let mut collection = EntityCollection::from_entities([item("a", 1)]);
        let shared = collection.clone();

        collection.update_one(&"a".to_owned(), |entry| entry.value = 9);

        assert_eq!(shared.get_one(&"a".to_owned()), Some(&item("a", 1)));
        assert_eq!(collection.get_one(&"a".to_owned()), Some(&item("a", 9)));
    }

    #[test]
    fn remove_many_ignores_absent_ids() {
        let mut collection = EntityCollection::from_entities([item("a", 1), item("b", 2)]);

        collection.remove_many([&"a".to_owned(), &"missing".to_owned()]);

        assert_eq!(collection.len(), 1);
        assert!(collection.contains(&"b".to_owned()));
    }

    #[test]
    fn id_index_on_list_finds_position() {
        let list = ["a".to_owned(), "b".to_owned()];
        assert_eq!(id_index_on_list(&list, &"b".to_owned()), Some(1));
        assert_eq!(id_index_on_list(&list, &"c".to_owned()), None);
    }
}
