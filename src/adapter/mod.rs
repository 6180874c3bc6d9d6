pub mod container_common;
pub mod queue;
pub mod set;

pub use container_common::ContainerCommon;
pub use queue::{CapacityExceeded, EmptyQueueError, Queue, QueueLike};
pub use set::{ElementNotFoundError, Set, SetLike};
