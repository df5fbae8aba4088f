//! Shared in-memory collection backing every entity store.
//!
//! Implements the generic store contract: insertion-ordered storage with
//! creates prepended, and id allocation from a monotonic counter. The
//! counter is seeded at `max(seed ids) + 1` (or 1 for an empty collection),
//! so freed ids are never reused, even after deleting the newest entity.

/// Access to an entity's id, required of everything held in a [`Collection`].
pub(crate) trait Record {
    fn id(&self) -> i64;
}

pub(crate) struct Collection<T: Record> {
    items: Vec<T>,
    next_id: i64,
}

impl<T: Record> Collection<T> {
    /// Builds a collection from seed data, deriving the id counter.
    pub fn seeded(items: Vec<T>) -> Self {
        let next_id = items.iter().map(Record::id).max().unwrap_or(0) + 1;

        Self { items, next_id }
    }

    pub fn empty() -> Self {
        Self::seeded(Vec::new())
    }

    /// Allocates the next id. Ids are strictly increasing and never reused.
    pub fn allocate_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn all(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }

    pub fn get(&self, id: i64) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn get_mut(&mut self, id: i64) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// Prepends, keeping the newest-first ordering of `all`.
    pub fn insert_front(&mut self, item: T) {
        self.items.insert(0, item);
    }

    pub fn remove(&mut self, id: i64) -> Option<T> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: i64,
    }

    impl Record for Row {
        fn id(&self) -> i64 {
            self.id
        }
    }

    #[test]
    fn test_empty_collection_starts_at_one() {
        let mut collection = Collection::<Row>::empty();
        assert_eq!(collection.allocate_id(), 1);
        assert_eq!(collection.allocate_id(), 2);
    }

    #[test]
    fn test_seeded_counter_continues_from_max() {
        let mut collection = Collection::seeded(vec![Row { id: 3 }, Row { id: 7 }, Row { id: 1 }]);
        assert_eq!(collection.allocate_id(), 8);
    }

    #[test]
    fn test_ids_not_reused_after_removing_newest() {
        let mut collection = Collection::<Row>::empty();

        let first = collection.allocate_id();
        collection.insert_front(Row { id: first });
        let second = collection.allocate_id();
        collection.insert_front(Row { id: second });

        collection.remove(second);

        assert_eq!(collection.allocate_id(), 3);
    }

    #[test]
    fn test_insert_front_orders_newest_first() {
        let mut collection = Collection::<Row>::empty();
        collection.insert_front(Row { id: 1 });
        collection.insert_front(Row { id: 2 });

        let all = collection.all();
        assert_eq!(all[0].id, 2);
        assert_eq!(all[1].id, 1);
    }

    #[test]
    fn test_remove_missing_returns_none() {
        let mut collection = Collection::<Row>::empty();
        assert!(collection.remove(9).is_none());
    }
}
