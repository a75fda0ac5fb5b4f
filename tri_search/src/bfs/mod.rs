//! The distributed, sharded, duplicate-eliminating BFS of §4.5: a
//! `Transport`-generic worker (`node`), the deterministic signature-to-shard
//! hash (`shard`), the cached peer idle/non-idle table (`peer_state`), and
//! the wire contract (`wire`) the one shipped transport implementation
//! (`transport::ChannelTransport`) is built on.

pub mod node;
pub mod peer_state;
pub mod shard;
pub mod transport;
pub mod wire;

pub use node::{BfsNode, SearchReport};
pub use transport::{ChannelTransport, Message, Transport};
