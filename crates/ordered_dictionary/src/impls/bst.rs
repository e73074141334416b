use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

use crate::OrderedMap;

/// Ordered dictionary backed by a plain binary search tree.
///
/// - Keys are unique; inserting an existing key replaces its value in place.
/// - The tree is never rebalanced, so its shape is a function of insertion order
///   alone. Sorted input degenerates into a list of `len` levels.
/// - Every walk (insert, lookup, delete, traversal, drop) is iterative, so
///   list-shaped trees never grow the call stack.
///
/// `V` defaults to `bool` for set-like use through [`OrderedDictionary::insert_key`].
pub struct OrderedDictionary<K, V = bool> {
    root: Link<K, V>,
    len: usize,
}

type Link<K, V> = Option<Box<Node<K, V>>>;

struct Node<K, V> {
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
        }
    }
}

/// A borrowed `{ key, value }` pair passed to [`OrderedDictionary::for_each`].
#[derive(Debug, PartialEq, Eq)]
pub struct Record<'a, K, V> {
    pub key: &'a K,
    pub value: &'a V,
}

impl<K, V> Clone for Record<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for Record<'_, K, V> {}

impl<K, V> OrderedDictionary<K, V> {
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Number of records currently stored.
    pub fn count(&self) -> usize {
        self.len
    }

    /// Same as [`count`](Self::count), under the name std collections use.
    pub fn len(&self) -> usize {
        self.count()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes on the longest root-to-leaf path, `0` when empty.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push((root, 1));
        }
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            if let Some(left) = node.left.as_deref() {
                stack.push((left, depth + 1));
            }
            if let Some(right) = node.right.as_deref() {
                stack.push((right, depth + 1));
            }
        }
        height
    }

    /// Iterates `(key, value)` pairs in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.root.as_deref(), self.len)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }

    /// Calls `callback(record, index, self)` once per record in ascending key
    /// order, with `index` counting up from zero.
    ///
    /// The dictionary is lent to the callback by shared reference, so it can be
    /// inspected (`count`, `lookup`, ...) mid-traversal but not mutated.
    pub fn for_each<'a, F>(&'a self, mut callback: F)
    where
        F: FnMut(Record<'a, K, V>, usize, &'a Self),
    {
        for (index, (key, value)) in self.iter().enumerate() {
            callback(Record { key, value }, index, self);
        }
    }

    fn unlink(slot: &mut Link<K, V>) -> Option<V> {
        let mut node = slot.take()?;
        match (node.left.take(), node.right.take()) {
            (None, None) => {}
            (Some(child), None) | (None, Some(child)) => *slot = Some(child),
            (Some(left), Some(mut right)) => match Self::detach_min(&mut right.left) {
                // `right` has no left child, so it is the successor.
                None => {
                    right.left = Some(left);
                    *slot = Some(right);
                }
                Some(successor) => {
                    let Node { key, value, .. } = *successor;
                    node.key = key;
                    let removed = std::mem::replace(&mut node.value, value);
                    node.left = Some(left);
                    node.right = Some(right);
                    *slot = Some(node);
                    return Some(removed);
                }
            },
        }
        let Node { value, .. } = *node;
        Some(value)
    }

    fn detach_min(mut link: &mut Link<K, V>) -> Option<Box<Node<K, V>>> {
        while link.as_ref()?.left.is_some() {
            link = &mut link.as_mut()?.left;
        }
        let mut node = link.take()?;
        *link = node.right.take();
        debug_assert!(node.left.is_none());
        Some(node)
    }
}

impl<K: Ord, V> OrderedDictionary<K, V> {
    /// Inserts `value` under `key`.
    ///
    /// Returns the previous value if the key was present; the record count only
    /// grows when the key is new.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let mut link = &mut self.root;
        while let Some(node) = link {
            match key.cmp(&node.key) {
                Ordering::Less => link = &mut node.left,
                Ordering::Greater => link = &mut node.right,
                Ordering::Equal => return Some(std::mem::replace(&mut node.value, value)),
            }
        }
        *link = Some(Box::new(Node::new(key, value)));
        self.len += 1;
        None
    }

    pub fn lookup<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match key.cmp(node.key.borrow()) {
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Greater => cur = node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            }
        }
        None
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.lookup(key).is_some()
    }

    /// Removes the record for `key` and returns its value, or `None` if absent.
    pub fn delete<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let slot = Self::find_slot(&mut self.root, key)?;
        let removed = Self::unlink(slot)?;
        self.len -= 1;
        Some(removed)
    }

    fn find_slot<'a, Q>(mut link: &'a mut Link<K, V>, key: &Q) -> Option<&'a mut Link<K, V>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        loop {
            let ord = key.cmp(link.as_deref()?.key.borrow());
            if ord == Ordering::Equal {
                return Some(link);
            }
            let node = link.as_mut()?;
            link = if ord == Ordering::Less {
                &mut node.left
            } else {
                &mut node.right
            };
        }
    }
}

impl<K: Ord, V: From<bool>> OrderedDictionary<K, V> {
    /// Inserts `key` with the value `true`.
    pub fn insert_key(&mut self, key: K) -> Option<V> {
        self.insert(key, V::from(true))
    }
}

impl<K, V> Drop for OrderedDictionary<K, V> {
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node<K, V>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<K, V> Default for OrderedDictionary<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedDictionary<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Ord, V> Extend<(K, V)> for OrderedDictionary<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for OrderedDictionary<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = Self::new();
        dict.extend(iter);
        dict
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedDictionary<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Ord, V> OrderedMap for OrderedDictionary<K, V> {
    type Key = K;
    type Value = V;

    fn new() -> Self {
        OrderedDictionary::new()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, key: &Self::Key) -> Option<&Self::Value> {
        self.lookup(key)
    }

    fn insert(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value> {
        OrderedDictionary::insert(self, key, value)
    }

    fn remove(&mut self, key: &Self::Key) -> Option<Self::Value> {
        self.delete(key)
    }

    fn traverse<F: FnMut(&Self::Key, &Self::Value)>(&self, mut visit: F) {
        for (key, value) in self.iter() {
            visit(key, value);
        }
    }
}

/// In-order iterator over an [`OrderedDictionary`].
///
/// Holds the left spine of the unvisited part of the tree on an explicit stack.
pub struct Iter<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    fn new(root: Option<&'a Node<K, V>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut cur: Option<&'a Node<K, V>>) {
        while let Some(node) = cur {
            self.stack.push(node);
            cur = node.left.as_deref();
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}
