//! Append-only JSONL audit log
//!
//! One entry per line. A line is serialized in full before the file is
//! opened, so a failed serialization never leaves a partial line behind.

use std::collections::VecDeque;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::{LedgerError, LedgerResult};

use super::entry::AuditEntry;

/// Writes and reads the audit log file
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one entry
    pub fn log(&self, entry: &AuditEntry) -> LedgerResult<()> {
        let mut line = serde_json::to_vec(entry)
            .map_err(|e| LedgerError::Json(format!("Failed to serialize audit entry: {}", e)))?;
        line.push(b'\n');

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .and_then(|mut file| file.write_all(&line))
            .map_err(|e| {
                LedgerError::Io(format!(
                    "Failed to write audit log {}: {}",
                    self.log_path.display(),
                    e
                ))
            })
    }

    /// Every entry, oldest first
    pub fn read_all(&self) -> LedgerResult<Vec<AuditEntry>> {
        self.read_tail(usize::MAX)
    }

    /// The last `count` entries, oldest first
    ///
    /// Only those lines are parsed, so damage further back in the file does
    /// not hide recent history.
    pub fn read_recent(&self, count: usize) -> LedgerResult<Vec<AuditEntry>> {
        self.read_tail(count)
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }

    fn read_tail(&self, count: usize) -> LedgerResult<Vec<AuditEntry>> {
        let file = match File::open(&self.log_path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(LedgerError::Io(format!("Failed to open audit log: {}", e))),
        };

        // (line number, text) of the newest non-blank lines
        let mut tail: VecDeque<(usize, String)> = VecDeque::new();
        for (i, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| {
                LedgerError::Io(format!("Failed to read audit log line {}: {}", i + 1, e))
            })?;
            if count == 0 || line.trim().is_empty() {
                continue;
            }
            if tail.len() == count {
                tail.pop_front();
            }
            tail.push_back((i + 1, line));
        }

        tail.iter()
            .map(|(line_num, line)| parse_line(*line_num, line))
            .collect()
    }
}

fn parse_line(line_num: usize, line: &str) -> LedgerResult<AuditEntry> {
    serde_json::from_str(line).map_err(|e| {
        LedgerError::Json(format!("Bad audit entry at line {}: {}", line_num, e))
    })
}
