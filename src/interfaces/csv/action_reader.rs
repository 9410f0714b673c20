use crate::error::{CartError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Add,
    Remove,
    Set,
    Clear,
}

/// One row of the cart action stream.
///
/// Only `action` is always required; the other columns depend on the action
/// (`add` needs `id` and `price`, `set` needs `id` and `quantity`, `remove`
/// needs `id`, `clear` needs nothing). The driver enforces those per-action
/// requirements; this type just captures what the row carried.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct ActionRecord {
    pub action: ActionKind,
    pub id: Option<u32>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub image: Option<String>,
    pub quantity: Option<u32>,
}

/// Reads cart actions from a CSV source.
///
/// Wraps `csv::Reader` and provides an iterator over `Result<ActionRecord>`,
/// handling whitespace trimming and flexible record lengths automatically.
pub struct ActionReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ActionReader<R> {
    /// Creates a new `ActionReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes actions, so a
    /// large stream never has to fit in memory at once.
    pub fn actions(self) -> impl Iterator<Item = Result<ActionRecord>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(CartError::from))
    }
}
