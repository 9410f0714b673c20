use crate::domain::line::CartLine;
use crate::domain::ports::CartStore;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// An in-memory cart slot.
///
/// `Clone` shares the underlying slot, so two engines constructed from clones
/// of the same store see the same persisted state. `None` means the slot was
/// never written (or was deleted), which is distinct from an empty line list.
#[derive(Default, Clone)]
pub struct InMemoryCartStore {
    slot: Arc<RwLock<Option<Vec<CartLine>>>>,
}

impl InMemoryCartStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartStore for InMemoryCartStore {
    async fn load(&self) -> Result<Option<Vec<CartLine>>> {
        let slot = self.slot.read().await;
        Ok(slot.clone())
    }

    async fn save(&self, lines: &[CartLine]) -> Result<()> {
        let mut slot = self.slot.write().await;
        *slot = Some(lines.to_vec());
        Ok(())
    }

    async fn delete(&self) -> Result<()> {
        let mut slot = self.slot.write().await;
        *slot = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::line::{ProductSnapshot, UnitPrice};
    use rust_decimal_macros::dec;

    fn line() -> CartLine {
        CartLine::new(
            ProductSnapshot {
                id: 1,
                name: "Banh Mi".to_string(),
                description: String::new(),
                price: UnitPrice::new(dec!(8.99)).unwrap(),
                image: String::new(),
            },
            2,
        )
    }

    #[tokio::test]
    async fn test_empty_slot_loads_none() {
        let store = InMemoryCartStore::new();
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let store = InMemoryCartStore::new();
        store.save(&[line()]).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded, vec![line()]);
    }

    #[tokio::test]
    async fn test_delete_resets_to_never_written() {
        let store = InMemoryCartStore::new();
        store.save(&[line()]).await.unwrap();
        store.delete().await.unwrap();
        assert!(store.load().await.unwrap().is_none());

        // Idempotent
        store.delete().await.unwrap();
    }

    #[tokio::test]
    async fn test_clone_shares_slot() {
        let store = InMemoryCartStore::new();
        let other = store.clone();
        store.save(&[line()]).await.unwrap();
        assert!(other.load().await.unwrap().is_some());
    }
}
