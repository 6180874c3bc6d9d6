use std::{
    collections::{LinkedList, VecDeque},
    convert::Infallible,
    marker::PhantomData,
};

use crate::{adapter::ContainerCommon, inplace::CircularQueue};

/// `serve` was called on an empty queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("serve on an empty queue")]
pub struct EmptyQueueError;

/// `append` was called on a full bounded queue. Hands the rejected item
/// back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("queue is at capacity")]
pub struct CapacityExceeded<T>(pub T);

/// First-in-first-out contract: items leave in the order they arrived.
pub trait QueueLike<T>: ContainerCommon {
    /// Error an implementation reports when it rejects an `append`.
    /// Implementations that grow on demand use [`Infallible`].
    type AppendError;

    /// Adds `item` at the rear of the queue.
    fn append(&mut self, item: T) -> Result<(), Self::AppendError>;

    /// Removes and returns the front item.
    fn serve(&mut self) -> Result<T, EmptyQueueError>;

    /// Removes every item.
    fn clear(&mut self);
}

/// Queue ADT over a pluggable backing container.
///
/// Also the ergonomic entry point for the std backings: `append` on a bare
/// [`Vec`] or [`VecDeque`] resolves to the inherent splice method of the
/// same name, while this wrapper resolves straight to the contract.
pub struct Queue<T, Container: QueueLike<T> = VecDeque<T>> {
    container: Container,
    _phantom_data: PhantomData<T>,
}

impl<T, Container: QueueLike<T>> Queue<T, Container> {
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

impl<T, Container: QueueLike<T>> From<Container> for Queue<T, Container> {
    #[inline]
    fn from(value: Container) -> Self {
        Self::new(value)
    }
}

impl<T, Container: QueueLike<T> + Default> Default for Queue<T, Container> {
    #[inline]
    fn default() -> Self {
        Self::new(Default::default())
    }
}

impl<T, Container: QueueLike<T> + std::fmt::Debug> std::fmt::Debug for Queue<T, Container> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Queue")
            .field("container", &self.container)
            .finish()
    }
}

impl<T, Container: QueueLike<T>> ContainerCommon for Queue<T, Container> {
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

impl<T, Container: QueueLike<T>> QueueLike<T> for Queue<T, Container> {
    type AppendError = Container::AppendError;

    #[inline]
    fn append(&mut self, item: T) -> Result<(), Self::AppendError> {
        self.container.append(item)
    }

    #[inline]
    fn serve(&mut self) -> Result<T, EmptyQueueError> {
        self.container.serve()
    }

    #[inline]
    fn clear(&mut self) {
        self.container.clear();
    }
}

impl<T> QueueLike<T> for Vec<T> {
    type AppendError = Infallible;

    #[inline]
    fn append(&mut self, item: T) -> Result<(), Self::AppendError> {
        self.push(item);
        Ok(())
    }

    #[inline]
    fn serve(&mut self) -> Result<T, EmptyQueueError> {
        (!self.is_empty())
            .then(|| self.remove(0))
            .ok_or(EmptyQueueError)
    }

    #[inline]
    fn clear(&mut self) {
        self.clear();
    }
}

impl<T> QueueLike<T> for VecDeque<T> {
    type AppendError = Infallible;

    #[inline]
    fn append(&mut self, item: T) -> Result<(), Self::AppendError> {
        self.push_back(item);
        Ok(())
    }

    #[inline]
    fn serve(&mut self) -> Result<T, EmptyQueueError> {
        self.pop_front().ok_or(EmptyQueueError)
    }

    #[inline]
    fn clear(&mut self) {
        self.clear();
    }
}

impl<T> QueueLike<T> for LinkedList<T> {
    type AppendError = Infallible;

    #[inline]
    fn append(&mut self, item: T) -> Result<(), Self::AppendError> {
        self.push_back(item);
        Ok(())
    }

    #[inline]
    fn serve(&mut self) -> Result<T, EmptyQueueError> {
        self.pop_front().ok_or(EmptyQueueError)
    }

    #[inline]
    fn clear(&mut self) {
        self.clear();
    }
}

impl<T, const N: usize> QueueLike<T> for CircularQueue<T, N> {
    type AppendError = CapacityExceeded<T>;

    #[inline]
    fn append(&mut self, item: T) -> Result<(), Self::AppendError> {
        self.push_back(item).map_err(CapacityExceeded)
    }

    #[inline]
    fn serve(&mut self) -> Result<T, EmptyQueueError> {
        self.pop_front().ok_or(EmptyQueueError)
    }

    #[inline]
    fn clear(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_capacity_three() {
        let mut q = CircularQueue::<i32, 3>::new();
        assert_eq!(q.append(1), Ok(()));
        assert_eq!(q.append(2), Ok(()));
        assert_eq!(q.append(3), Ok(()));
        assert!(q.is_full());
        assert_eq!(q.append(4), Err(CapacityExceeded(4)));
        assert_eq!(q.serve(), Ok(1));
        assert!(!q.is_full());
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn test_fifo_order() {
        let mut q = CircularQueue::<usize, 8>::new();
        for i in 0..8 {
            assert_eq!(q.append(i), Ok(()));
        }
        for i in 0..8 {
            assert_eq!(q.serve(), Ok(i));
        }
        assert_eq!(q.serve(), Err(EmptyQueueError));
    }

    #[test]
    fn test_scripted_mix_against_model() {
        let mut q = CircularQueue::<u32, 4>::new();
        let mut model = VecDeque::new();
        let mut next = 0;
        let script = [
            true, true, false, true, true, false, false, true, true, true, false, true, false,
            false, true, true, false, false, false, true, true, true, true, false, false, false,
            false,
        ];
        for &push in &script {
            if push {
                match q.append(next) {
                    Ok(()) => model.push_back(next),
                    Err(CapacityExceeded(rejected)) => {
                        assert_eq!(rejected, next);
                        assert_eq!(model.len(), 4);
                    }
                }
                next += 1;
            } else {
                assert_eq!(q.serve().ok(), model.pop_front());
            }
            assert_eq!(q.len(), model.len());
        }
        assert!(q.is_empty());
    }

    #[test]
    fn test_unbounded_backings_never_fill() {
        let mut q: Queue<i32> = Queue::default();
        for i in 0..100 {
            q.append(i).unwrap();
        }
        assert!(!q.is_full());
        assert_eq!(q.capacity(), usize::MAX);
        assert_eq!(q.len(), 100);
        assert_eq!(q.serve(), Ok(0));

        // bare std containers need the qualified form: their inherent
        // `append(&mut Self)` shadows the contract method
        let mut ll = LinkedList::new();
        assert_eq!(QueueLike::append(&mut ll, 7), Ok(()));
        assert!(!ll.is_full());
        assert_eq!(QueueLike::serve(&mut ll), Ok(7));

        let mut v = Vec::new();
        assert_eq!(QueueLike::append(&mut v, 1), Ok(()));
        assert_eq!(QueueLike::append(&mut v, 2), Ok(()));
        assert_eq!(QueueLike::serve(&mut v), Ok(1));
        assert_eq!(v, [2]);
    }

    #[test]
    fn test_wrapper_over_bounded_container() {
        let mut q: Queue<u8, CircularQueue<u8, 2>> = Queue::default();
        assert_eq!(q.append(1), Ok(()));
        assert_eq!(q.append(2), Ok(()));
        assert_eq!(q.append(3), Err(CapacityExceeded(3)));
        assert_eq!(q.serve(), Ok(1));
        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.serve(), Err(EmptyQueueError));
        assert_eq!(q.into_inner().len(), 0);
    }

    #[test]
    fn test_wrapper_debug() {
        let q: Queue<i32> = Queue::new(VecDeque::from([1, 2]));
        assert_eq!(format!("{:?}", q), "Queue { container: [1, 2] }");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(EmptyQueueError.to_string(), "serve on an empty queue");
        assert_eq!(CapacityExceeded(9).to_string(), "queue is at capacity");
    }
}
