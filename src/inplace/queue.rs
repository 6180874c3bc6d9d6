use core::{
    fmt, hash,
    iter::FusedIterator,
    mem::MaybeUninit,
    ops::{Index, IndexMut},
    ptr, slice,
};

/// Fixed-capacity FIFO queue over a circular buffer.
///
/// A front index and the logical length advance modulo `N`, the backing
/// array's length, so neither `push_back` nor `pop_front` ever shifts
/// elements.
pub struct CircularQueue<T, const N: usize> {
    buf: [MaybeUninit<T>; N],
    front: usize,
    len: usize,
}

impl<T, const N: usize> CircularQueue<T, N> {
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: [const { MaybeUninit::uninit() }; N],
            front: 0,
            len: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == N
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        let index = self.to_physical_index(index);
        Some(unsafe { self.buf.get_unchecked(index).assume_init_ref() })
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let index = self.to_physical_index(index);
        Some(unsafe { self.buf.get_unchecked_mut(index).assume_init_mut() })
    }

    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.get(self.len.wrapping_sub(1))
    }

    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.get_mut(self.len.wrapping_sub(1))
    }

    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        let (a, b) = self.as_slices();
        a.contains(x) || b.contains(x)
    }

    /// Front run and wrapped tail run of the live elements, in queue order.
    #[inline]
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let head_len = usize::min(self.len, N - self.front);
        let ptr = self.buf.as_ptr() as *const T;
        // The two runs cover exactly the initialized region and nothing else.
        unsafe {
            (
                slice::from_raw_parts(ptr.add(self.front), head_len),
                slice::from_raw_parts(ptr, self.len - head_len),
            )
        }
    }

    #[inline]
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let head_len = usize::min(self.len, N - self.front);
        let ptr = self.buf.as_mut_ptr() as *mut T;
        // The two runs are disjoint: the wrapped tail ends before `front`.
        unsafe {
            (
                slice::from_raw_parts_mut(ptr.add(self.front), head_len),
                slice::from_raw_parts_mut(ptr, self.len - head_len),
            )
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        let (a, b) = self.as_slices();
        Iter {
            front: a.iter(),
            back: b.iter(),
        }
    }

    /// Appends at the rear, handing `value` back when the queue is full.
    pub fn push_back(&mut self, value: T) -> Result<(), T> {
        if self.is_full() {
            return Err(value);
        }
        let index = self.to_physical_index(self.len);
        unsafe { self.buf.get_unchecked_mut(index).write(value) };
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the front element.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let old_front = self.front;
        self.front = self.to_physical_index(1);
        self.len -= 1;
        Some(unsafe { self.buf.get_unchecked(old_front).assume_init_read() })
    }

    pub fn clear(&mut self) {
        struct Dropper<'a, T>(&'a mut [T]);
        impl<T> Drop for Dropper<'_, T> {
            fn drop(&mut self) {
                unsafe { ptr::drop_in_place(self.0) };
            }
        }

        let (front, back) = self.as_mut_slices();
        let front = front as *mut [T];
        let back = back as *mut [T];
        // Reset the indices first: a panicking destructor must not leave
        // them pointing at dropped elements.
        self.front = 0;
        self.len = 0;
        unsafe {
            let _back_dropper = Dropper(&mut *back);
            ptr::drop_in_place(front);
        }
    }
}

impl<T, const N: usize> CircularQueue<T, N> {
    #[inline]
    fn to_physical_index(&self, index: usize) -> usize {
        wrap_index::<N>(self.front.wrapping_add(index))
    }
}

/// Wraps a logical position into the backing array. The modulus is the
/// array's fixed length, never the queue's current element count.
#[inline]
fn wrap_index<const CAPACITY: usize>(logical_index: usize) -> usize {
    debug_assert!(
        (logical_index == 0 && CAPACITY == 0)
            || logical_index < CAPACITY
            || (logical_index - CAPACITY) < CAPACITY
    );
    if CAPACITY.is_power_of_two() {
        return logical_index & (CAPACITY - 1);
    }
    if logical_index >= CAPACITY {
        logical_index - CAPACITY
    } else {
        logical_index
    }
}

impl<T, const N: usize> Default for CircularQueue<T, N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const N: usize> Clone for CircularQueue<T, N> {
    #[inline]
    fn clone(&self) -> Self {
        Self::from_iter(self.iter().cloned())
    }
}

impl<T, const N: usize> Drop for CircularQueue<T, N> {
    fn drop(&mut self) {
        struct Dropper<'a, T>(&'a mut [T]);
        impl<T> Drop for Dropper<'_, T> {
            fn drop(&mut self) {
                unsafe { ptr::drop_in_place(self.0) };
            }
        }

        // Drop the wrapped tail even when a front destructor panics.
        let (front, back) = self.as_mut_slices();
        let _back_dropper = Dropper(back);
        unsafe { ptr::drop_in_place(front) };
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for CircularQueue<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, const N: usize> PartialEq for CircularQueue<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq, const N: usize> Eq for CircularQueue<T, N> {}

impl<T, U, const N: usize> PartialEq<[U]> for CircularQueue<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.len == other.len() && self.iter().eq(other.iter())
    }
}

impl<T, U, const N: usize> PartialEq<&[U]> for CircularQueue<T, N>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &&[U]) -> bool {
        PartialEq::eq(self, *other)
    }
}

impl<T, U, const N: usize, const M: usize> PartialEq<[U; M]> for CircularQueue<T, N>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U; M]) -> bool {
        PartialEq::eq(self, other.as_slice())
    }
}

impl<T: hash::Hash, const N: usize> hash::Hash for CircularQueue<T, N> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        self.iter().for_each(|x| x.hash(state));
    }
}

impl<T, const N: usize> Index<usize> for CircularQueue<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        self.get(index).expect("out of bounds access")
    }
}

impl<T, const N: usize> IndexMut<usize> for CircularQueue<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.get_mut(index).expect("out of bounds access")
    }
}

impl<T, const N: usize> FromIterator<T> for CircularQueue<T, N> {
    /// Takes at most `N` items; the rest of `iter` is left unconsumed.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut q = Self::new();
        let len = q
            .buf
            .iter_mut()
            .zip(iter)
            .map(|(dst, src)| dst.write(src))
            .count();
        q.len = len;
        q
    }
}

impl<T, const N: usize> From<[T; N]> for CircularQueue<T, N> {
    fn from(value: [T; N]) -> Self {
        Self {
            buf: value.map(MaybeUninit::new),
            front: 0,
            len: N,
        }
    }
}

impl<T, const N: usize> IntoIterator for CircularQueue<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self }
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a CircularQueue<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    front: slice::Iter<'a, T>,
    back: slice::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.front.next().or_else(|| self.back.next())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.front.len() + self.back.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.back.next_back().or_else(|| self.front.next_back())
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.front.len() + self.back.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

/// Drains the queue front to back.
#[derive(Clone)]
pub struct IntoIter<T, const N: usize> {
    inner: CircularQueue<T, N>,
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for IntoIter<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.inner).finish()
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }

    #[inline]
    fn count(self) -> usize {
        self.inner.len
    }
}

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len
    }
}

impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}
