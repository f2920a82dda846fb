//! CSV file I/O with atomic rewrites
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, Read, Seek, SeekFrom, Write};
use std::path::Path;

use csv::{ReaderBuilder, Terminator, WriterBuilder};

use crate::error::LedgerError;
use crate::models::ExpenseRecord;

/// Read every row of a CSV file, the first row included
///
/// Rows are read without header handling and may have any number of fields.
pub fn read_csv_rows<P: AsRef<Path>>(path: P) -> Result<Vec<ExpenseRecord>, LedgerError> {
    let path = path.as_ref();

    let file = File::open(path)
        .map_err(|e| LedgerError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let mut rows = Vec::new();
    for (line_num, result) in reader.records().enumerate() {
        let record = result.map_err(|e| {
            LedgerError::Csv(format!(
                "Failed to read {} at row {}: {}",
                path.display(),
                line_num + 1,
                e
            ))
        })?;
        rows.push(ExpenseRecord::from_fields(record.iter()));
    }

    Ok(rows)
}

/// Append one row to the end of a CSV file, creating the file if needed
pub fn append_csv_row<P: AsRef<Path>>(path: P, row: &ExpenseRecord) -> Result<(), LedgerError> {
    let path = path.as_ref();

    let needs_newline = !ends_with_newline(path)
        .map_err(|e| LedgerError::Io(format!("Failed to inspect {}: {}", path.display(), e)))?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LedgerError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    if needs_newline {
        file.write_all(b"\n")
            .map_err(|e| LedgerError::Io(format!("Failed to write {}: {}", path.display(), e)))?;
    }

    let mut writer = csv_writer(file);
    writer.write_record(row.fields())?;
    writer
        .flush()
        .map_err(|e| LedgerError::Io(format!("Failed to flush {}: {}", path.display(), e)))?;

    Ok(())
}

/// Write rows to a CSV file atomically (write to temp, then rename)
///
/// The file is either completely replaced or not modified at all.
pub fn write_csv_atomic<'a, P, I>(path: P, rows: I) -> Result<(), LedgerError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = &'a ExpenseRecord>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            LedgerError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target, so the rename stays on one filesystem
    let mut temp_name = path.as_os_str().to_os_string();
    temp_name.push(".tmp");
    let temp_path = Path::new(&temp_name);

    let result = write_rows(temp_path, rows).and_then(|()| {
        fs::rename(temp_path, path)
            .map_err(|e| LedgerError::Io(format!("Failed to rename temp file: {}", e)))
    });

    if result.is_err() {
        let _ = fs::remove_file(temp_path);
    }

    result
}

fn write_rows<'a, I>(temp_path: &Path, rows: I) -> Result<(), LedgerError>
where
    I: IntoIterator<Item = &'a ExpenseRecord>,
{
    let file = File::create(temp_path)
        .map_err(|e| LedgerError::Io(format!("Failed to create temp file: {}", e)))?;

    let mut writer = csv_writer(file);
    for row in rows {
        writer.write_record(row.fields())?;
    }

    let file = writer
        .into_inner()
        .map_err(|e| LedgerError::Io(format!("Failed to flush data: {}", e.error())))?;

    // Sync to disk before rename
    file.sync_all()
        .map_err(|e| LedgerError::Io(format!("Failed to sync data: {}", e)))
}

fn csv_writer<W: Write>(inner: W) -> csv::Writer<W> {
    WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(inner)
}

/// A missing or empty file counts as ending with a newline
fn ends_with_newline(path: &Path) -> std::io::Result<bool> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(true),
        Err(e) => return Err(e),
    };

    if file.metadata()?.len() == 0 {
        return Ok(true);
    }

    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
