pub use crate::dedup_queue::DedupQueue;
pub use crate::executor::{ExecutorHandle, Runnable, ThreadedExecutor};
pub use crate::outbox::Outbox;
pub use crate::sequence::AtomicCounter;
pub use crate::wait::{BlockingWaitStrategy, WaitStrategy};
