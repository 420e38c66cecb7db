use crate::application::checkout::Receipt;
use crate::error::Result;
use std::io::Write;

/// Writes receipts as CSV to any `Write` sink (e.g., Stdout).
pub struct ReceiptWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ReceiptWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Serializes the receipts, header first, and flushes the sink.
    pub fn write_receipts(&mut self, receipts: Vec<Receipt>) -> Result<()> {
        for receipt in receipts {
            self.writer.serialize(receipt)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
