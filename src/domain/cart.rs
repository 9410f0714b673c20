use crate::domain::line::{CartLine, ProductSnapshot};
use crate::error::CartError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::collections::HashSet;

/// Sales tax applied on top of the subtotal.
pub const TAX_RATE: Decimal = dec!(0.10);

/// Derived aggregates for a cart state, computed fresh on request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CartTotals {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub item_count: u64,
}

/// The ordered collection of lines for one shopper session.
///
/// `Cart` is the pure state machine: it performs no I/O and upholds two
/// invariants across every operation:
/// - at most one line per product `id`;
/// - every present line has `quantity >= 1`.
///
/// Operations that would violate a precondition (zero quantity on `add`,
/// unknown `id` on `remove`/`set_quantity`) are accepted as no-ops rather than
/// errors, which keeps callers free of error plumbing for ordinary use.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a cart from persisted lines, validating the invariants.
    ///
    /// This is the single decode/validate point for stored data: duplicate
    /// product ids and zero quantities are structural errors here, never
    /// normalized ad hoc elsewhere.
    pub fn from_lines(lines: Vec<CartLine>) -> Result<Self, CartError> {
        let mut seen = HashSet::new();
        for line in &lines {
            if line.quantity == 0 {
                return Err(CartError::ValidationError(format!(
                    "Line {} has zero quantity",
                    line.id
                )));
            }
            if !seen.insert(line.id) {
                return Err(CartError::ValidationError(format!(
                    "Duplicate line id {}",
                    line.id
                )));
            }
        }
        Ok(Self { lines })
    }

    /// Adds `quantity` units of a product.
    ///
    /// A zero quantity is a no-op. If a line for the product already exists,
    /// its quantity is incremented and the original snapshot fields win; the
    /// incoming snapshot is discarded.
    pub fn add(&mut self, product: ProductSnapshot, quantity: u32) {
        if quantity == 0 {
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == product.id) {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            self.lines.push(CartLine::new(product, quantity));
        }
    }

    /// Removes the line for `id`; no-op when absent.
    pub fn remove(&mut self, id: u32) {
        self.lines.retain(|l| l.id != id);
    }

    /// Sets the quantity of an existing line.
    ///
    /// Zero removes the line. An unknown `id` is a no-op: this never creates
    /// a line, creation goes through `add`.
    pub fn set_quantity(&mut self, id: u32, quantity: u32) {
        if quantity == 0 {
            self.remove(id);
        } else if let Some(line) = self.lines.iter_mut().find(|l| l.id == id) {
            line.quantity = quantity;
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn contains(&self, id: u32) -> bool {
        self.lines.iter().any(|l| l.id == id)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of `price * quantity` over all lines. Always recomputed from the
    /// current lines, never cached.
    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn tax(&self) -> Decimal {
        self.subtotal() * TAX_RATE
    }

    pub fn total(&self) -> Decimal {
        self.subtotal() + self.tax()
    }

    /// Total unit count across all lines, not the number of distinct lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    pub fn totals(&self) -> CartTotals {
        CartTotals {
            subtotal: self.subtotal(),
            tax: self.tax(),
            total: self.total(),
            item_count: self.item_count(),
        }
    }
}
