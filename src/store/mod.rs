//! Persistence (C2, §4.2): the `Store` contract and its two adapters.

mod error;
mod memory;
mod sled_store;
mod traits;

pub use error::StorageError;
pub use memory::MemoryStore;
pub use sled_store::SledStore;
pub use traits::{skip_write, Store};
