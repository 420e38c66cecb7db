use crate::domain::event::CheckoutEvent;
use crate::error::{CheckoutError, Result};
use std::io::Read;

/// Reads checkout events from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over
/// `Result<CheckoutEvent>`. It handles whitespace trimming and flexible
/// record lengths automatically.
pub struct EventReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> EventReader<R> {
    /// Creates a new `EventReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes events.
    ///
    /// A malformed line yields an `Err` item without aborting the stream, so
    /// callers can report and continue.
    pub fn events(self) -> impl Iterator<Item = Result<CheckoutEvent>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(CheckoutError::from))
    }
}
