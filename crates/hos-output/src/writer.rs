//! The `OutputWriter` trait implemented by all backend writers.

use crate::{DutyEntryRow, LogSheetRow, OutputResult, TripSummaryRow};

/// Trait implemented by the CSV and JSON writers.
///
/// Errors are stored by [`TripOutputObserver`][crate::TripOutputObserver]
/// and retrieved with its `take_error`.
pub trait OutputWriter {
    /// Write one duty entry, in emission order.
    fn write_entry(&mut self, row: &DutyEntryRow) -> OutputResult<()>;

    /// Write the finished log sheets.
    fn write_days(&mut self, rows: &[LogSheetRow]) -> OutputResult<()>;

    fn write_summary(&mut self, row: &TripSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
