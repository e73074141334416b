pub mod impls;

/// Ordered map interface shared by the dictionary and its baseline.
///
/// - Keys are unique.
/// - `insert` overwrites the existing value and returns the old one.
/// - `traverse` visits every entry in ascending key order.
pub trait OrderedMap {
    type Key: Ord;
    type Value;

    fn new() -> Self;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, key: &Self::Key) -> Option<&Self::Value>;

    fn insert(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value>;

    fn remove(&mut self, key: &Self::Key) -> Option<Self::Value>;

    fn traverse<F: FnMut(&Self::Key, &Self::Value)>(&self, visit: F);
}

pub use impls::{Iter, OrderedDictionary, Record, StdBTreeMap};
