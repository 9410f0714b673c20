use crate::domain::line::CartLine;
use crate::domain::ports::CartStore;
use crate::error::{CartError, Result};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;

/// A durable cart slot backed by a single JSON file.
///
/// The file holds the serialized line array and nothing else. A missing file
/// means the slot was never written; `delete` removes the file itself rather
/// than writing an empty array, so "cleared" and "never initialized" collapse
/// into the same load result.
#[derive(Debug, Clone)]
pub struct JsonFileCartStore {
    path: PathBuf,
}

impl JsonFileCartStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CartStore for JsonFileCartStore {
    async fn load(&self) -> Result<Option<Vec<CartLine>>> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(CartError::from(e)),
        };
        let lines = serde_json::from_slice(&bytes)?;
        Ok(Some(lines))
    }

    async fn save(&self, lines: &[CartLine]) -> Result<()> {
        let bytes = serde_json::to_vec(lines)?;
        std::fs::write(&self.path, bytes)?;
        Ok(())
    }

    async fn delete(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CartError::from(e)),
        }
    }
}
