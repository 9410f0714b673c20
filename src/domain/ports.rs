use super::line::CartLine;
use crate::error::Result;
use async_trait::async_trait;

/// The durable single-slot store a cart persists through.
///
/// Each store instance owns exactly one slot, and the engine is that slot's
/// only writer. `load` distinguishes a slot that was never written (`Ok(None)`)
/// from one whose contents cannot be decoded (`Err`); recovery policy for the
/// latter belongs to the engine, not the store.
#[async_trait]
pub trait CartStore: Send + Sync {
    async fn load(&self) -> Result<Option<Vec<CartLine>>>;
    async fn save(&self, lines: &[CartLine]) -> Result<()>;
    /// Removes the slot itself. Idempotent: deleting an absent slot is fine.
    async fn delete(&self) -> Result<()>;
}

pub type CartStoreBox = Box<dyn CartStore>;
