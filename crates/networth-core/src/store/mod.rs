//! Persistence adapters for the state document.
//!
//! The ledger never touches a storage medium directly: it hands a
//! serialized blob to a `StateStore` and gets one back.

mod json_file;
mod memory;
mod traits;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use traits::StateStore;
