//! JSON output backend (`json` feature).
//!
//! Buffers every row and writes a single `trip_log.json` on `finish`:
//!
//! ```json
//! { "summary": { ... }, "entries": [ ... ], "days": [ ... ] }
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::writer::OutputWriter;
use crate::{DutyEntryRow, LogSheetRow, OutputResult, TripSummaryRow};

#[derive(Serialize)]
struct Document<'a> {
    summary: Option<&'a TripSummaryRow>,
    entries: &'a [DutyEntryRow],
    days:    &'a [LogSheetRow],
}

/// Writes the whole trip as one JSON document.
pub struct JsonWriter {
    path:     PathBuf,
    entries:  Vec<DutyEntryRow>,
    days:     Vec<LogSheetRow>,
    summary:  Option<TripSummaryRow>,
    finished: bool,
}

impl JsonWriter {
    /// Target `dir/trip_log.json`; nothing is written until `finish`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        if !dir.is_dir() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("output directory {} does not exist", dir.display()),
            )
            .into());
        }
        Ok(Self {
            path:     dir.join("trip_log.json"),
            entries:  Vec::new(),
            days:     Vec::new(),
            summary:  None,
            finished: false,
        })
    }
}

impl OutputWriter for JsonWriter {
    fn write_entry(&mut self, row: &DutyEntryRow) -> OutputResult<()> {
        self.entries.push(row.clone());
        Ok(())
    }

    fn write_days(&mut self, rows: &[LogSheetRow]) -> OutputResult<()> {
        self.days.extend_from_slice(rows);
        Ok(())
    }

    fn write_summary(&mut self, row: &TripSummaryRow) -> OutputResult<()> {
        self.summary = Some(row.clone());
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;

        let doc = Document {
            summary: self.summary.as_ref(),
            entries: &self.entries,
            days:    &self.days,
        };
        let mut out = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut out, &doc)?;
        out.flush()?;
        Ok(())
    }
}
