use crate::domain::line::CartLine;
use crate::domain::ports::CartStore;
use crate::error::{CartError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamilyDescriptor, DB, Options};
use std::path::Path;
use std::sync::Arc;

/// Column Family holding cart slots.
pub const CF_CARTS: &str = "carts";
/// The single slot key; one store instance owns one cart.
pub const CART_KEY: &[u8] = b"cart";

/// A persistent cart slot backed by RocksDB.
///
/// The cart lives under a fixed key in its own column family, JSON-encoded.
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDbCartStore {
    db: Arc<DB>,
}

impl RocksDbCartStore {
    /// Opens or creates a RocksDB instance at the specified path, ensuring the
    /// carts column family exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_carts = ColumnFamilyDescriptor::new(CF_CARTS, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf_carts])?;

        Ok(Self { db: Arc::new(db) })
    }

    fn cf(&self) -> Result<&rocksdb::ColumnFamily> {
        self.db
            .cf_handle(CF_CARTS)
            .ok_or_else(|| CartError::StorageError("Carts column family not found".to_string()))
    }
}

#[async_trait]
impl CartStore for RocksDbCartStore {
    async fn load(&self) -> Result<Option<Vec<CartLine>>> {
        let cf = self.cf()?;
        match self.db.get_cf(cf, CART_KEY)? {
            Some(bytes) => {
                let lines = serde_json::from_slice(&bytes)?;
                Ok(Some(lines))
            }
            None => Ok(None),
        }
    }

    async fn save(&self, lines: &[CartLine]) -> Result<()> {
        let cf = self.cf()?;
        let value = serde_json::to_vec(lines)?;
        self.db.put_cf(cf, CART_KEY, value)?;
        Ok(())
    }

    async fn delete(&self) -> Result<()> {
        let cf = self.cf()?;
        self.db.delete_cf(cf, CART_KEY)?;
        Ok(())
    }
}
