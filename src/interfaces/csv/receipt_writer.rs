use crate::domain::cart::CartTotals;
use crate::domain::line::CartLine;
use crate::error::Result;
use rust_decimal::Decimal;
use std::io::Write;

/// Writes the final cart state as a CSV receipt.
///
/// One row per line followed by `items`, `subtotal`, `tax` and `total`
/// summary rows. Monetary values are normalized (trailing zeros trimmed) for
/// display only; the stored cart keeps exact values.
pub struct ReceiptWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ReceiptWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_receipt(&mut self, lines: &[CartLine], totals: CartTotals) -> Result<()> {
        self.writer
            .write_record(["id", "name", "quantity", "unit_price", "line_total"])?;

        for line in lines {
            self.writer.write_record([
                line.id.to_string(),
                line.name.clone(),
                line.quantity.to_string(),
                display(line.price.value()),
                display(line.line_total()),
            ])?;
        }

        self.writer.write_record([
            String::new(),
            "items".to_string(),
            totals.item_count.to_string(),
            String::new(),
            String::new(),
        ])?;
        self.write_summary("subtotal", totals.subtotal)?;
        self.write_summary("tax", totals.tax)?;
        self.write_summary("total", totals.total)?;

        self.writer.flush()?;
        Ok(())
    }

    fn write_summary(&mut self, label: &str, amount: Decimal) -> Result<()> {
        self.writer.write_record([
            String::new(),
            label.to_string(),
            String::new(),
            String::new(),
            display(amount),
        ])?;
        Ok(())
    }
}

fn display(amount: Decimal) -> String {
    amount.normalize().to_string()
}
