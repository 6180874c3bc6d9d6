use std::{fmt, iter::FusedIterator, slice};

const BLOCK_BITS: usize = u64::BITS as usize;

#[inline]
const fn locate(value: usize) -> (usize, u64) {
    (value / BLOCK_BITS, 1u64 << (value % BLOCK_BITS))
}

/// Bit-vector set over `usize` values.
///
/// Storage grows with the largest value present: one bit per value, packed
/// into 64-bit blocks. The block vector never ends in a zero word and `len`
/// always equals the number of set bits, so equal sets compare equal
/// structurally.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitSet {
    blocks: Vec<u64>,
    len: usize,
}

impl BitSet {
    #[inline]
    pub const fn new() -> Self {
        Self {
            blocks: Vec::new(),
            len: 0,
        }
    }

    /// Preallocates room for values below `max_value`.
    pub fn with_capacity(max_value: usize) -> Self {
        Self {
            blocks: Vec::with_capacity(max_value.div_ceil(BLOCK_BITS)),
            len: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, value: usize) -> bool {
        let (block, mask) = locate(value);
        self.blocks.get(block).is_some_and(|word| word & mask != 0)
    }

    /// Sets the bit for `value`. Returns whether it was newly set.
    pub fn insert(&mut self, value: usize) -> bool {
        let (block, mask) = locate(value);
        if block >= self.blocks.len() {
            self.blocks.resize(block + 1, 0);
        }
        let word = &mut self.blocks[block];
        if *word & mask != 0 {
            return false;
        }
        *word |= mask;
        self.len += 1;
        true
    }

    /// Clears the bit for `value`. Returns whether it was set.
    pub fn remove(&mut self, value: usize) -> bool {
        let (block, mask) = locate(value);
        match self.blocks.get_mut(block) {
            Some(word) if *word & mask != 0 => {
                *word &= !mask;
                self.len -= 1;
                self.trim();
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.blocks.clear();
        self.len = 0;
    }

    /// Values present in either operand, as a new set.
    pub fn union(&self, other: &Self) -> Self {
        let (longer, shorter) = if self.blocks.len() >= other.blocks.len() {
            (self, other)
        } else {
            (other, self)
        };
        let mut blocks = longer.blocks.clone();
        for (word, other_word) in blocks.iter_mut().zip(&shorter.blocks) {
            *word |= other_word;
        }
        Self::from_blocks(blocks)
    }

    /// Values present in both operands, as a new set.
    pub fn intersection(&self, other: &Self) -> Self {
        // zip stops at the shorter operand; bits past it cannot be shared.
        let blocks = self
            .blocks
            .iter()
            .zip(&other.blocks)
            .map(|(a, b)| a & b)
            .collect();
        Self::from_blocks(blocks)
    }

    /// Values present in `self` but not in `other`, as a new set.
    pub fn difference(&self, other: &Self) -> Self {
        let mut blocks = self.blocks.clone();
        for (word, other_word) in blocks.iter_mut().zip(&other.blocks) {
            *word &= !other_word;
        }
        Self::from_blocks(blocks)
    }

    /// Iterates the values in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            blocks: self.blocks.iter(),
            word: 0,
            base: 0,
            remaining: self.len,
        }
    }

    fn from_blocks(mut blocks: Vec<u64>) -> Self {
        while blocks.last() == Some(&0) {
            blocks.pop();
        }
        let len = blocks.iter().map(|word| word.count_ones() as usize).sum();
        Self { blocks, len }
    }

    fn trim(&mut self) {
        while self.blocks.last() == Some(&0) {
            self.blocks.pop();
        }
    }
}

impl Default for BitSet {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Extend<usize> for BitSet {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl FromIterator<usize> for BitSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a> IntoIterator for &'a BitSet {
    type Item = usize;
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Yields set values in ascending order.
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    blocks: slice::Iter<'a, u64>,
    word: u64,
    base: usize,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.word == 0 {
            self.word = *self.blocks.next()?;
            self.base += BLOCK_BITS;
        }
        let bit = self.word.trailing_zeros() as usize;
        // clear the lowest set bit
        self.word &= self.word - 1;
        self.remaining -= 1;
        Some(self.base - BLOCK_BITS + bit)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {
    #[inline]
    fn len(&self) -> usize {
        self.remaining
    }
}

impl FusedIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_insert_across_blocks() {
        let mut s = BitSet::new();
        assert!(s.insert(0));
        assert!(s.insert(63));
        assert!(s.insert(64));
        assert!(s.insert(1000));
        assert!(!s.insert(64));
        assert_eq!(s.len(), 4);
        assert!(s.contains(63));
        assert!(s.contains(1000));
        assert!(!s.contains(999));
        assert!(!s.contains(100_000));
    }

    #[test]
    fn t_remove_trims_trailing_blocks() {
        let mut a = BitSet::new();
        a.insert(5);
        let mut b = BitSet::new();
        b.insert(5);
        b.insert(1000);
        assert!(b.remove(1000));
        assert!(!b.remove(1000));
        // equal contents must mean equal representation
        assert_eq!(a, b);
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn t_algebra() {
        let a: BitSet = [1, 2, 3].into_iter().collect();
        let b: BitSet = [2, 3, 4].into_iter().collect();
        assert_eq!(a.union(&b), [1, 2, 3, 4].into_iter().collect::<BitSet>());
        assert_eq!(a.intersection(&b), [2, 3].into_iter().collect::<BitSet>());
        assert_eq!(a.difference(&b), [1].into_iter().collect::<BitSet>());
        for x in 0..8 {
            assert_eq!(a.union(&b).contains(x), a.contains(x) || b.contains(x));
            assert_eq!(
                a.intersection(&b).contains(x),
                a.contains(x) && b.contains(x)
            );
            assert_eq!(
                a.difference(&b).contains(x),
                a.contains(x) && !b.contains(x)
            );
        }
        // operands stay untouched
        assert_eq!(a.len(), 3);
        assert_eq!(b.len(), 3);
    }

    #[test]
    fn t_algebra_uneven_lengths() {
        let small: BitSet = [1].into_iter().collect();
        let large: BitSet = [1, 200].into_iter().collect();
        assert_eq!(small.union(&large), large);
        assert_eq!(large.intersection(&small), small);
        assert_eq!(
            large.difference(&small),
            [200].into_iter().collect::<BitSet>()
        );
        assert_eq!(small.difference(&large), BitSet::new());
    }

    #[test]
    fn t_iter_ascending() {
        let s: BitSet = [300, 2, 64, 7].into_iter().collect();
        let values: Vec<_> = s.iter().collect();
        assert_eq!(values, [2, 7, 64, 300]);
        assert_eq!(s.iter().len(), 4);
        assert_eq!(format!("{:?}", s), "{2, 7, 64, 300}");
    }

    #[test]
    fn t_clear() {
        let mut s: BitSet = (0..100).collect();
        assert_eq!(s.len(), 100);
        s.clear();
        assert!(s.is_empty());
        assert!(!s.contains(0));
        assert!(s.insert(0));
    }
}
