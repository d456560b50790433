//! In-memory table with store-assigned ids

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::domain::DomainError;

#[derive(Debug)]
struct Rows<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

/// Thread-safe in-memory stand-in for an AUTO_INCREMENT table
///
/// Ids start at 1, are never reused, and rows iterate in id order. Useful for
/// testing and development. Data is lost when the process terminates.
#[derive(Debug)]
pub struct InMemoryTable<T> {
    inner: RwLock<Rows<T>>,
}

impl<T> Default for InMemoryTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> InMemoryTable<T> {
    /// Creates a new empty table
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Rows {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl<T: Clone> InMemoryTable<T> {
    /// Insert a row built from the id the table assigns
    pub fn insert(&self, build: impl FnOnce(i64) -> T) -> Result<T, DomainError> {
        let mut inner = self.inner.write().map_err(|e| {
            DomainError::storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let id = inner.next_id;
        inner.next_id += 1;

        let row = build(id);
        inner.rows.insert(id, row.clone());
        Ok(row)
    }

    /// Every row, in id order
    pub fn all(&self) -> Result<Vec<T>, DomainError> {
        let inner = self.inner.read().map_err(|e| {
            DomainError::storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(inner.rows.values().cloned().collect())
    }

    /// Rows matching a predicate, in id order
    pub fn filter(&self, predicate: impl Fn(&T) -> bool) -> Result<Vec<T>, DomainError> {
        let inner = self.inner.read().map_err(|e| {
            DomainError::storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(inner.rows.values().filter(|row| predicate(row)).cloned().collect())
    }

    pub fn get(&self, id: i64) -> Result<Option<T>, DomainError> {
        let inner = self.inner.read().map_err(|e| {
            DomainError::storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(inner.rows.get(&id).cloned())
    }

    /// Replace an existing row; `None` when `id` is absent
    pub fn replace(&self, id: i64, row: T) -> Result<Option<T>, DomainError> {
        let mut inner = self.inner.write().map_err(|e| {
            DomainError::storage(format!("Failed to acquire write lock: {}", e))
        })?;

        match inner.rows.get_mut(&id) {
            Some(slot) => {
                *slot = row.clone();
                Ok(Some(row))
            }
            None => Ok(None),
        }
    }

    /// Remove a row, returning whether it existed
    pub fn remove(&self, id: i64) -> Result<bool, DomainError> {
        let mut inner = self.inner.write().map_err(|e| {
            DomainError::storage(format!("Failed to acquire write lock: {}", e))
        })?;

        Ok(inner.rows.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_assigns_increasing_ids() {
        let table = InMemoryTable::new();

        let first = table.insert(|id| (id, "a")).unwrap();
        let second = table.insert(|id| (id, "b")).unwrap();

        assert_eq!(first.0, 1);
        assert_eq!(second.0, 2);
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let table = InMemoryTable::new();

        table.insert(|id| id).unwrap();
        assert!(table.remove(1).unwrap());

        let next = table.insert(|id| id).unwrap();
        assert_eq!(next, 2);
    }

    #[test]
    fn test_replace_missing_row() {
        let table: InMemoryTable<i64> = InMemoryTable::new();
        assert_eq!(table.replace(9, 9).unwrap(), None);
        assert!(table.all().unwrap().is_empty());
    }

    #[test]
    fn test_filter_keeps_id_order() {
        let table = InMemoryTable::new();

        for _ in 0..5 {
            table.insert(|id| id).unwrap();
        }

        assert_eq!(table.filter(|id| id % 2 == 1).unwrap(), vec![1, 3, 5]);
    }
}
