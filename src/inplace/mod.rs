pub mod queue;

pub use queue::CircularQueue;
