mod bst;
mod std_btree;

pub use bst::{Iter, OrderedDictionary, Record};
pub use std_btree::StdBTreeMap;
