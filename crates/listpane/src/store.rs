//! Immutable, shareable row storage.

use std::ops::Deref;
use std::sync::Arc;

/// The dataset behind one or more views.
///
/// Rows are fixed at construction and shared by reference count, so cloning
/// a store is cheap and every clone sees the same rows.
#[derive(Debug)]
pub struct RecordStore<T> {
    rows: Arc<[T]>,
}

impl<T> RecordStore<T> {
    pub fn new(rows: Vec<T>) -> Self {
        RecordStore { rows: rows.into() }
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<T> Clone for RecordStore<T> {
    fn clone(&self) -> Self {
        RecordStore {
            rows: Arc::clone(&self.rows),
        }
    }
}

impl<T> Deref for RecordStore<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.rows
    }
}

impl<T> From<Vec<T>> for RecordStore<T> {
    fn from(rows: Vec<T>) -> Self {
        RecordStore::new(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_rows() {
        let store = RecordStore::new(vec![1, 2, 3]);
        let other = store.clone();

        assert_eq!(other.rows(), &[1, 2, 3]);
        assert!(std::ptr::eq(store.rows(), other.rows()));
    }

    #[test]
    fn empty_store() {
        let store: RecordStore<u8> = Vec::new().into();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }
}
