//! Node set ordered by a caller-supplied comparator.
//!
//! `BTreeSet` can only order by `Ord`. `SortedNodes` carries its comparator as a
//! value, so two sets of the same node type may be ordered differently and an
//! empty set created from an existing one keeps the ordering.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

pub type Comparator<N> = Arc<dyn Fn(&N, &N) -> Ordering + Send + Sync>;

pub struct SortedNodes<N> {
    items: Vec<N>,
    order: Comparator<N>,
}

impl<N> SortedNodes<N> {
    pub fn new<F>(order: F) -> Self
    where
        F: Fn(&N, &N) -> Ordering + Send + Sync + 'static,
    {
        Self::with_comparator(Arc::new(order))
    }

    pub fn with_comparator(order: Comparator<N>) -> Self {
        Self {
            items: Vec::new(),
            order,
        }
    }

    /// An empty set ordered by the same comparator.
    pub fn empty_like(&self) -> Self {
        Self::with_comparator(Arc::clone(&self.order))
    }

    pub fn comparator(&self) -> &Comparator<N> {
        &self.order
    }

    fn search(&self, node: &N) -> Result<usize, usize> {
        self.items.binary_search_by(|probe| (self.order)(probe, node))
    }

    /// Inserts `node` at its ordered position; false if an equal node is present.
    pub fn insert(&mut self, node: N) -> bool {
        match self.search(&node) {
            Ok(_) => false,
            Err(pos) => {
                self.items.insert(pos, node);
                true
            }
        }
    }

    pub fn contains(&self, node: &N) -> bool {
        self.search(node).is_ok()
    }

    pub fn remove(&mut self, node: &N) -> bool {
        match self.search(node) {
            Ok(pos) => {
                self.items.remove(pos);
                true
            }
            Err(_) => false,
        }
    }

    pub fn retain<F: FnMut(&N) -> bool>(&mut self, keep: F) {
        self.items.retain(keep);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, N> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[N] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<N> {
        self.items
    }
}

impl<N> Extend<N> for SortedNodes<N> {
    fn extend<I: IntoIterator<Item = N>>(&mut self, iter: I) {
        for node in iter {
            self.insert(node);
        }
    }
}

impl<'a, N> IntoIterator for &'a SortedNodes<N> {
    type Item = &'a N;
    type IntoIter = std::slice::Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<N> IntoIterator for SortedNodes<N> {
    type Item = N;
    type IntoIter = std::vec::IntoIter<N>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<N: Clone> Clone for SortedNodes<N> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            order: Arc::clone(&self.order),
        }
    }
}

impl<N: PartialEq> PartialEq for SortedNodes<N> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<N: fmt::Debug> fmt::Debug for SortedNodes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.items.iter()).finish()
    }
}
