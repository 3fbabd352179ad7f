//! mep-collect: per-category identifier collection with global dedup.
//!
//! One [`IdCollector`] spans a whole run. Each network's traversal tree is
//! fed to it once; every underlying element identifier (revisit nodes
//! included) lands in the owning network's category bucket exactly once
//! across all networks. Buckets keep insertion order so repeated runs over
//! the same input diff cleanly.
//!
//! The collector is an explicit accumulator object, not ambient state:
//! parallel pipelines collect into local instances and [`IdCollector::merge`]
//! folds them together in network order.

use std::collections::HashSet;

use mep_core::{Category, Uid};
use mep_traverse::TraversalTree;
use serde_json::Value;

/// One category bucket: insertion-ordered, deduplicated identifiers.
#[derive(Debug, Clone, Default)]
struct Bucket {
    order: Vec<Uid>,
    seen: HashSet<Uid>,
}

impl Bucket {
    fn insert(&mut self, uid: Uid) {
        if self.seen.insert(uid) {
            self.order.push(uid);
        }
    }
}

/// Three-bucket identifier accumulator for one run.
#[derive(Debug, Clone, Default)]
pub struct IdCollector {
    mechanical: Bucket,
    electrical: Bucket,
    piping: Bucket,
}

impl IdCollector {
    pub fn new() -> Self {
        Self::default()
    }

    fn bucket(&self, category: Category) -> &Bucket {
        match category {
            Category::Mechanical => &self.mechanical,
            Category::Electrical => &self.electrical,
            Category::Piping => &self.piping,
        }
    }

    fn bucket_mut(&mut self, category: Category) -> &mut Bucket {
        match category {
            Category::Mechanical => &mut self.mechanical,
            Category::Electrical => &mut self.electrical,
            Category::Piping => &mut self.piping,
        }
    }

    /// Walk one tree, inserting every node's identifier into the given
    /// category. Order within the tree doesn't matter; dedup is global.
    pub fn collect(&mut self, category: Category, tree: &TraversalTree) {
        let bucket = self.bucket_mut(category);
        for (_, node) in tree.iter() {
            bucket.insert(node.uid);
        }
    }

    /// Fold another collector into this one, preserving the other's
    /// insertion order after ids already present here.
    pub fn merge(&mut self, other: IdCollector) {
        for category in Category::ALL {
            let incoming = match category {
                Category::Mechanical => &other.mechanical,
                Category::Electrical => &other.electrical,
                Category::Piping => &other.piping,
            };
            let bucket = self.bucket_mut(category);
            for &uid in &incoming.order {
                bucket.insert(uid);
            }
        }
    }

    /// Identifiers collected for a category, in insertion order.
    pub fn ids(&self, category: Category) -> &[Uid] {
        &self.bucket(category).order
    }

    /// Total identifiers across all three categories.
    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|&c| self.ids(c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The category's identifiers as a JSON array value.
    pub fn as_json_array(&self, category: Category) -> Value {
        Value::from(self.ids(category).to_vec())
    }
}
