use std::{
    collections::{BTreeSet, HashSet},
    hash::Hash,
    marker::PhantomData,
};

use crate::{adapter::ContainerCommon, bitset::BitSet};

/// `remove` was called with an element the set does not contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("element not found in set")]
pub struct ElementNotFoundError;

/// Unique-element collection with set algebra.
///
/// Two elements are the same element iff they compare equal; hash-based
/// implementations additionally require a hash consistent with equality.
pub trait SetLike<T>: ContainerCommon {
    /// Membership test.
    fn contains(&self, item: &T) -> bool;

    /// Inserts `item` and reports whether the set changed. Adding an
    /// element that is already present is a no-op returning `false`.
    fn add(&mut self, item: T) -> bool;

    /// Deletes `item`, failing when it is absent.
    fn remove(&mut self, item: &T) -> Result<(), ElementNotFoundError>;

    /// Removes every element.
    fn clear(&mut self);

    /// Elements present in either operand, as a new set. Neither operand
    /// is modified.
    fn union(&self, other: &Self) -> Self
    where
        Self: Sized,
        T: Clone;

    /// Elements present in both operands, as a new set.
    fn intersection(&self, other: &Self) -> Self
    where
        Self: Sized,
        T: Clone;

    /// Elements present in `self` but absent from `other`, as a new set.
    fn difference(&self, other: &Self) -> Self
    where
        Self: Sized,
        T: Clone;
}

/// Set ADT over a pluggable backing container.
///
/// Also the ergonomic entry point for the std backings: `union` on a bare
/// [`HashSet`] resolves to the inherent iterator of the same name, while
/// this wrapper resolves straight to the contract.
pub struct Set<T, Container: SetLike<T> = HashSet<T>> {
    container: Container,
    _phantom_data: PhantomData<T>,
}

impl<T, Container: SetLike<T>> Set<T, Container> {
    #[inline]
    pub fn new(container: Container) -> Self {
        Self {
            container,
            _phantom_data: PhantomData,
        }
    }

    #[inline]
    pub fn inner(&self) -> &Container {
        &self.container
    }

    #[inline]
    pub fn inner_mut(&mut self) -> &mut Container {
        &mut self.container
    }

    #[inline]
    pub fn into_inner(self) -> Container {
        self.container
    }
}

impl<T, Container: SetLike<T>> From<Container> for Set<T, Container> {
    #[inline]
    fn from(value: Container) -> Self {
        Self::new(value)
    }
}

impl<T, Container: SetLike<T> + Default> Default for Set<T, Container> {
    #[inline]
    fn default() -> Self {
        Self::new(Default::default())
    }
}

impl<T, Container: SetLike<T> + std::fmt::Debug> std::fmt::Debug for Set<T, Container> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Set")
            .field("container", &self.container)
            .finish()
    }
}

impl<T, Container: SetLike<T>> ContainerCommon for Set<T, Container> {
    #[inline]
    fn len(&self) -> usize {
        self.container.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.container.capacity()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.container.is_empty()
    }

    #[inline]
    fn is_full(&self) -> bool {
        self.container.is_full()
    }
}

impl<T, Container: SetLike<T>> SetLike<T> for Set<T, Container> {
    #[inline]
    fn contains(&self, item: &T) -> bool {
        self.container.contains(item)
    }

    #[inline]
    fn add(&mut self, item: T) -> bool {
        self.container.add(item)
    }

    #[inline]
    fn remove(&mut self, item: &T) -> Result<(), ElementNotFoundError> {
        self.container.remove(item)
    }

    #[inline]
    fn clear(&mut self) {
        self.container.clear();
    }

    #[inline]
    fn union(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        Self::new(self.container.union(&other.container))
    }

    #[inline]
    fn intersection(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        Self::new(self.container.intersection(&other.container))
    }

    #[inline]
    fn difference(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        Self::new(self.container.difference(&other.container))
    }
}

impl<T: Eq + Hash> SetLike<T> for HashSet<T> {
    #[inline]
    fn contains(&self, item: &T) -> bool {
        self.contains(item)
    }

    #[inline]
    fn add(&mut self, item: T) -> bool {
        self.insert(item)
    }

    #[inline]
    fn remove(&mut self, item: &T) -> Result<(), ElementNotFoundError> {
        self.remove(item).then_some(()).ok_or(ElementNotFoundError)
    }

    #[inline]
    fn clear(&mut self) {
        self.clear();
    }

    #[inline]
    fn union(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        self.union(other).cloned().collect()
    }

    #[inline]
    fn intersection(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        self.intersection(other).cloned().collect()
    }

    #[inline]
    fn difference(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        self.difference(other).cloned().collect()
    }
}

impl<T: Ord> SetLike<T> for BTreeSet<T> {
    #[inline]
    fn contains(&self, item: &T) -> bool {
        self.contains(item)
    }

    #[inline]
    fn add(&mut self, item: T) -> bool {
        self.insert(item)
    }

    #[inline]
    fn remove(&mut self, item: &T) -> Result<(), ElementNotFoundError> {
        self.remove(item).then_some(()).ok_or(ElementNotFoundError)
    }

    #[inline]
    fn clear(&mut self) {
        self.clear();
    }

    #[inline]
    fn union(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        self.union(other).cloned().collect()
    }

    #[inline]
    fn intersection(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        self.intersection(other).cloned().collect()
    }

    #[inline]
    fn difference(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        self.difference(other).cloned().collect()
    }
}

impl SetLike<usize> for BitSet {
    #[inline]
    fn contains(&self, item: &usize) -> bool {
        self.contains(*item)
    }

    #[inline]
    fn add(&mut self, item: usize) -> bool {
        self.insert(item)
    }

    #[inline]
    fn remove(&mut self, item: &usize) -> Result<(), ElementNotFoundError> {
        self.remove(*item).then_some(()).ok_or(ElementNotFoundError)
    }

    #[inline]
    fn clear(&mut self) {
        self.clear();
    }

    #[inline]
    fn union(&self, other: &Self) -> Self {
        self.union(other)
    }

    #[inline]
    fn intersection(&self, other: &Self) -> Self {
        self.intersection(other)
    }

    #[inline]
    fn difference(&self, other: &Self) -> Self {
        self.difference(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_noop_on_duplicates() {
        let mut s: Set<i32> = Set::default();
        assert!(s.add(7));
        assert_eq!(s.len(), 1);
        assert!(!s.add(7));
        assert_eq!(s.len(), 1);
        assert!(s.contains(&7));
    }

    #[test]
    fn test_remove() {
        let mut s: Set<i32> = Set::default();
        s.add(1);
        assert_eq!(s.remove(&1), Ok(()));
        assert!(!s.contains(&1));
        assert_eq!(s.remove(&1), Err(ElementNotFoundError));
        assert_eq!(s.len(), 0);
    }

    #[test]
    fn test_algebra_scenario() {
        let a: Set<i32> = Set::new([1, 2, 3].into_iter().collect());
        let b: Set<i32> = Set::new([2, 3, 4].into_iter().collect());

        let union = a.union(&b);
        let intersection = a.intersection(&b);
        let difference = a.difference(&b);

        assert_eq!(union.len(), 4);
        for x in [1, 2, 3, 4] {
            assert!(union.contains(&x));
        }
        assert_eq!(intersection.len(), 2);
        assert!(intersection.contains(&2) && intersection.contains(&3));
        assert_eq!(difference.len(), 1);
        assert!(difference.contains(&1));

        // algebra reads its operands, never consumes them
        assert_eq!(a.len(), 3);
        assert_eq!(b.len(), 3);
    }

    #[test]
    fn test_membership_laws() {
        let a: HashSet<i32> = [0, 2, 4, 6, 8].into_iter().collect();
        let b: HashSet<i32> = [4, 5, 6, 7].into_iter().collect();
        // bare std sets need the qualified form: their inherent `union`
        // returns a lazy iterator instead of a set
        let union = SetLike::union(&a, &b);
        let intersection = SetLike::intersection(&a, &b);
        let difference = SetLike::difference(&a, &b);
        for x in 0..10 {
            assert_eq!(union.contains(&x), a.contains(&x) || b.contains(&x));
            assert_eq!(intersection.contains(&x), a.contains(&x) && b.contains(&x));
            assert_eq!(difference.contains(&x), a.contains(&x) && !b.contains(&x));
        }
    }

    #[test]
    fn test_bitset_backing() {
        let mut s: Set<usize, BitSet> = Set::default();
        for v in [3, 64, 3, 200] {
            s.add(v);
        }
        assert_eq!(s.len(), 3);
        assert_eq!(s.remove(&64), Ok(()));
        assert_eq!(s.remove(&64), Err(ElementNotFoundError));

        let evens: Set<usize, BitSet> = Set::new((0..100).filter(|v| v % 2 == 0).collect());
        let small: Set<usize, BitSet> = Set::new((0..10).collect());
        let both = evens.intersection(&small);
        assert_eq!(both.len(), 5);
        assert!(both.contains(&8));
        assert!(!both.contains(&10));
    }

    #[test]
    fn test_btreeset_backing_and_clear() {
        let mut s: Set<String, BTreeSet<String>> = Set::default();
        assert!(s.add("a".to_owned()));
        assert!(s.add("b".to_owned()));
        assert!(!s.add("a".to_owned()));
        assert_eq!(s.len(), 2);
        s.clear();
        assert!(s.is_empty());
        assert!(!s.is_full());
        assert_eq!(s.capacity(), usize::MAX);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(ElementNotFoundError.to_string(), "element not found in set");
    }
}
