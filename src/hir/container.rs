//! Prefix-searchable symbol containers.

use super::search_tree::TernarySearchTree;
use super::symbols::{KeywordSymbol, VariableSymbol};

/// Something that can be stored in a [`SymbolContainer`].
pub trait Symbol: Clone + PartialEq {
    /// Lookup key before normalization
    fn key(&self) -> String;
}

/// Keys are compared case-insensitively.
pub fn normalize_key(key: &str) -> String {
    key.to_lowercase()
}

/// Symbols indexed by normalized key.
#[derive(Debug, Clone)]
pub struct SymbolContainer<T> {
    tree: TernarySearchTree<T>,
}

impl<T> Default for SymbolContainer<T> {
    fn default() -> Self {
        Self {
            tree: TernarySearchTree::default(),
        }
    }
}

pub type KeywordContainer = SymbolContainer<KeywordSymbol>;
pub type VariableContainer = SymbolContainer<VariableSymbol>;

impl<T: Symbol> SymbolContainer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: T) {
        let key = normalize_key(&item.key());
        self.tree.insert(&key, item);
    }

    /// Remove one stored item equal to `item`. Returns whether one was found.
    pub fn remove(&mut self, item: &T) -> bool {
        let key = normalize_key(&item.key());
        let mut removed = false;
        self.tree.remove_where(&key, |stored| {
            if !removed && stored == item {
                removed = true;
                true
            } else {
                false
            }
        });
        removed
    }

    pub fn find_by_prefix(&self, prefix: &str) -> Vec<&T> {
        self.tree.find_by_prefix(&normalize_key(prefix))
    }

    /// Items whose key equals `key` (case-insensitively)
    pub fn find_exact(&self, key: &str) -> &[T] {
        self.tree.get(&normalize_key(key))
    }

    /// Add every item of `other`.
    pub fn copy_from(&mut self, other: &SymbolContainer<T>) {
        for item in other.iter() {
            self.add(item.clone());
        }
    }

    /// Remove every item of `other` (one stored copy per item).
    pub fn remove_all(&mut self, other: &SymbolContainer<T>) {
        for item in other.iter() {
            self.remove(item);
        }
    }

    pub fn size(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// All items in key order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.tree.values().into_iter()
    }

    pub fn clear(&mut self) {
        self.tree.clear();
    }
}
