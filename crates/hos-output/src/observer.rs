//! `TripOutputObserver<W>`: bridges `EngineObserver` to an `OutputWriter`.

use hos_core::DutyEntry;
use hos_engine::{EngineObserver, TripLog};

use crate::row::{DutyEntryRow, LogSheetRow, TripSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// An [`EngineObserver`] that streams entries to any [`OutputWriter`] while
/// the trip is planned, then writes the log sheets and summary at the end.
///
/// Errors from the writer are stored internally because `EngineObserver`
/// methods have no return value.  After `run` returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct TripOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> TripOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `run` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after planning).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> EngineObserver for TripOutputObserver<W> {
    fn on_entry(&mut self, entry: &DutyEntry) {
        let result = self.writer.write_entry(&DutyEntryRow::from(entry));
        self.store_err(result);
    }

    fn on_trip_end(&mut self, log: &TripLog) {
        let rows: Vec<LogSheetRow> = log.days.iter().map(LogSheetRow::from).collect();
        let result = self.writer.write_days(&rows);
        self.store_err(result);

        let result = self.writer.write_summary(&TripSummaryRow::from(log));
        self.store_err(result);

        let result = self.writer.finish();
        self.store_err(result);
    }
}
