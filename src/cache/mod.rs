//! Response caching
//!
//! Two tiers sit in front of the network: a process-lifetime in-memory map and a
//! SQLite-backed durable store (with file blobs for large payloads). The
//! `ResourceFetcher` resolves requests through both before touching the network.

pub mod fetcher;
pub mod key;
pub mod memory;
pub mod storage;

pub use fetcher::ResourceFetcher;
pub use key::RequestSignature;
pub use memory::VolatileCache;
pub use storage::DurableCache;
