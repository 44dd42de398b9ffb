//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `duty_entries.csv`
//! - `logsheet_days.csv`
//! - `trip_summary.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{DutyEntryRow, LogSheetRow, OutputResult, TripSummaryRow};

/// Writes trip output to three CSV files.
pub struct CsvWriter {
    entries:  Writer<File>,
    days:     Writer<File>,
    summary:  Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut entries = Writer::from_path(dir.join("duty_entries.csv"))?;
        entries.write_record([
            "day_index", "start", "end", "duty_status", "minutes", "note", "rule_applied",
            "explanation",
        ])?;

        let mut days = Writer::from_path(dir.join("logsheet_days.csv"))?;
        days.write_record([
            "day_index", "date", "driving_hours", "on_duty_hours", "off_duty_hours",
            "sleeper_hours", "grid",
        ])?;

        let mut summary = Writer::from_path(dir.join("trip_summary.csv"))?;
        summary.write_record([
            "start_time", "end_time", "entries", "days", "driving_minutes", "final_cycle_hours",
        ])?;

        Ok(Self { entries, days, summary, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_entry(&mut self, row: &DutyEntryRow) -> OutputResult<()> {
        let day_index = row.day_index.to_string();
        let minutes = row.minutes.to_string();
        self.entries.write_record([
            day_index.as_str(),
            row.start.as_str(),
            row.end.as_str(),
            row.duty_status,
            minutes.as_str(),
            row.note.as_str(),
            row.rule_applied,
            row.explanation.as_str(),
        ])?;
        Ok(())
    }

    fn write_days(&mut self, rows: &[LogSheetRow]) -> OutputResult<()> {
        for row in rows {
            self.days.write_record(&[
                row.day_index.to_string(),
                row.date.clone(),
                format!("{:.2}", row.driving_hours),
                format!("{:.2}", row.on_duty_hours),
                format!("{:.2}", row.off_duty_hours),
                format!("{:.2}", row.sleeper_hours),
                row.grid.clone(),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &TripSummaryRow) -> OutputResult<()> {
        self.summary.write_record(&[
            row.start_time.clone(),
            row.end_time.clone(),
            row.entries.to_string(),
            row.days.to_string(),
            row.driving_minutes.to_string(),
            format!("{:.2}", row.final_cycle_hours),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.entries.flush()?;
        self.days.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
