//! Buffered CSV output for generated readings.
//!
//! Rows are streamed straight from the producer into a large csv buffer, so
//! memory stays flat no matter how many rows are written.

use crate::types::{ReadingRow, CSV_HEADER};
use crate::{Error, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Output buffer size for the csv writer (1 MiB)
pub const OUTPUT_BUFFER_BYTES: usize = 1024 * 1024;

/// Default number of rows between progress reports
pub const DEFAULT_PROGRESS_EVERY: u64 = 1_000_000;

/// Receiver for progress checkpoints during a write
pub trait ProgressSink {
    /// Called each time the running row count hits a multiple of the interval
    fn rows_written(&mut self, count: u64);

    /// Called once after every row has been flushed to `path`
    fn finished(&mut self, total: u64, path: &Path);
}

/// Progress sink that discards everything
#[derive(Debug, Default)]
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn rows_written(&mut self, _count: u64) {}

    fn finished(&mut self, _total: u64, _path: &Path) {}
}

/// Write the header and every row to `out`, returning the row count.
///
/// Does not report completion; see [`write_dataset`].
pub fn write_rows<W, I, P>(out: W, rows: I, progress_every: u64, progress: &mut P) -> Result<u64>
where
    W: Write,
    I: IntoIterator<Item = ReadingRow>,
    P: ProgressSink + ?Sized,
{
    if progress_every == 0 {
        return Err(Error::Validation(
            "progress interval must be at least 1 row".into(),
        ));
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .buffer_capacity(OUTPUT_BUFFER_BYTES)
        .from_writer(out);

    // Written by hand so an empty run still gets a header
    writer.write_record(CSV_HEADER)?;

    let mut count: u64 = 0;
    for row in rows {
        writer.serialize(&row)?;
        count += 1;

        if count % progress_every == 0 {
            tracing::debug!("Progress checkpoint at {} rows", count);
            progress.rows_written(count);
        }
    }

    writer.flush()?;
    Ok(count)
}

/// Write a complete dataset file at `path`.
///
/// Parent directories are created and an existing file is truncated. The
/// file is not written atomically; a failure mid-stream leaves a partial file.
pub fn write_dataset<I, P>(
    path: &Path,
    rows: I,
    progress_every: u64,
    progress: &mut P,
) -> Result<u64>
where
    I: IntoIterator<Item = ReadingRow>,
    P: ProgressSink + ?Sized,
{
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    tracing::info!("Writing wearable dataset to {:?}", path);

    let total = write_rows(file, rows, progress_every, &mut *progress)?;

    tracing::info!("Wrote {} rows to {:?}", total, path);
    progress.finished(total, path);
    Ok(total)
}

/// Format a count with `,` thousands separators (1234567 -> "1,234,567")
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}
