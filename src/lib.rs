#[cfg(feature = "adapter")]
pub mod adapter;

pub mod bitset;

pub mod inplace;

#[cfg(feature = "adapter")]
pub use adapter::{
    CapacityExceeded, ContainerCommon, ElementNotFoundError, EmptyQueueError, Queue, QueueLike,
    Set, SetLike,
};
pub use bitset::BitSet;
pub use inplace::CircularQueue;
