//! Append-only observation stream I/O.
//!
//! Recordings are JSONL: a `# `-prefixed header line followed by one
//! observation frame per line. Append-only writes with periodic flushing
//! keep a crashed session replayable up to its last flushed frame.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;

use airctl_common::error::{AirctlError, AirctlResult};
use airctl_hand_model::stream::{ObservationFrame, ObservationStreamHeader};

/// Writes observation frames to a JSONL file.
pub struct ObservationWriter {
    writer: BufWriter<File>,
    path: PathBuf,
    frames_written: u64,
}

impl ObservationWriter {
    /// Create a new writer, emitting the header as the first line.
    pub fn new(path: PathBuf, header: ObservationStreamHeader) -> AirctlResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)?;

        let mut writer = BufWriter::new(file);

        // Header as a comment line so plain JSONL tooling skips it.
        let header_json = serde_json::to_string(&header)?;
        writeln!(writer, "# {header_json}")
            .map_err(|e| AirctlError::stream(format!("Failed to write header: {e}")))?;

        Ok(Self {
            writer,
            path,
            frames_written: 0,
        })
    }

    /// Write a single frame as a JSONL line.
    pub fn write_frame(&mut self, frame: &ObservationFrame) -> AirctlResult<()> {
        let json = serde_json::to_string(frame)?;
        writeln!(self.writer, "{json}")
            .map_err(|e| AirctlError::stream(format!("Failed to write frame: {e}")))?;
        self.frames_written += 1;

        // Flush every 1000 frames for crash safety
        if self.frames_written % 1000 == 0 {
            self.flush()?;
        }

        Ok(())
    }

    /// Flush buffered writes to disk.
    pub fn flush(&mut self) -> AirctlResult<()> {
        self.writer
            .flush()
            .map_err(|e| AirctlError::stream(format!("Failed to flush frames: {e}")))?;
        Ok(())
    }

    /// Number of frames written.
    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    /// Path to the output file.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Drop for ObservationWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

/// Reads observation frames from a JSONL stream.
pub struct ObservationReader<R: Read> {
    lines: std::io::Lines<BufReader<R>>,
    header: ObservationStreamHeader,
}

impl ObservationReader<File> {
    /// Open a recorded stream file.
    pub fn open(path: &std::path::Path) -> AirctlResult<Self> {
        let file = File::open(path).map_err(|_| AirctlError::FileNotFound {
            path: path.to_path_buf(),
        })?;
        Self::new(file)
    }
}

impl<R: Read> ObservationReader<R> {
    /// Wrap any reader producing a JSONL observation stream. The first
    /// line must be the `# `-prefixed header.
    pub fn new(reader: R) -> AirctlResult<Self> {
        let mut lines = BufReader::new(reader).lines();

        let first = lines
            .next()
            .ok_or_else(|| AirctlError::stream("Empty observation stream"))??;
        let header_json = first
            .strip_prefix("# ")
            .ok_or_else(|| AirctlError::stream("Observation stream missing header line"))?;
        let header: ObservationStreamHeader = serde_json::from_str(header_json)?;

        Ok(Self { lines, header })
    }

    /// Stream metadata from the header line.
    pub fn header(&self) -> &ObservationStreamHeader {
        &self.header
    }

    /// Read the next frame. Blank lines are skipped; malformed lines are
    /// dropped with a debug log so one bad detector write cannot kill a
    /// replay. Returns None at end of stream.
    pub fn next_frame(&mut self) -> AirctlResult<Option<ObservationFrame>> {
        for line in self.lines.by_ref() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            match serde_json::from_str(trimmed) {
                Ok(frame) => return Ok(Some(frame)),
                Err(e) => {
                    tracing::debug!(error = %e, "Skipping malformed observation line");
                }
            }
        }
        Ok(None)
    }
}
