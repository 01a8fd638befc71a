//! Store trait definition.

use crate::error::Result;

/// A place the serialized ledger state lives.
///
/// Implementations must ensure:
/// - `save` replaces the previous blob atomically
/// - `load` returns `Ok(None)` when nothing has been saved yet
pub trait StateStore {
    /// Read the last saved blob.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Storage` if the medium exists but cannot be read.
    fn load(&self) -> Result<Option<String>>;

    /// Replace the stored blob.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Storage` if the blob cannot be written.
    fn save(&mut self, blob: &str) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_is_object_safe() {
        fn _accepts_dyn_store(_store: &mut dyn StateStore) {}
    }
}
