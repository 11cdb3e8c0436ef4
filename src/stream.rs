//! Stream processing.
//!
//! Reads a stream line by line, decides its format once from a lookahead
//! sample, replays the sample, then styles the rest of the stream. Every
//! input line is written exactly once, in its original order.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, error, info};

use crate::classify::{classify_and_style, is_countable};
use crate::formats::{detect_format, Format, LOOKAHEAD_LINES};
use crate::scheme::ColorScheme;

/// Errors that can occur while processing a stream.
#[derive(Error, Debug)]
pub enum StreamError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Could not detect format from content.\n\
             Hint: Use -f/--format to specify the format explicitly:\n  \
             colordna -f fasta <file>")]
    UndecidableFormat,
}

/// Result type for stream operations.
pub type StreamResult<T> = Result<T, StreamError>;

/// Counts gathered while processing one stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamSummary {
    pub format: Format,
    /// Lines written
    pub lines: usize,
    /// Lines that start a record
    pub records: usize,
}

/// Outcome of processing several files in turn.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub completed: Vec<(PathBuf, StreamSummary)>,
    pub failed: Vec<(PathBuf, StreamError)>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Reads lines without requiring valid UTF-8.
///
/// Strips the trailing `\n` and any `\r` before it, or a lone `\r` ending
/// the last line. Invalid bytes are replaced rather than rejected.
struct Lines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> Lines<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::with_capacity(256),
        }
    }
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                }
                // Also on a final line without newline
                if self.buf.last() == Some(&b'\r') {
                    self.buf.pop();
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

/// Styles streams with a fixed scheme.
#[derive(Debug, Clone, Copy)]
pub struct StreamProcessor<'a> {
    scheme: &'a ColorScheme,
    /// Bypasses detection when set
    forced_format: Option<Format>,
}

impl<'a> StreamProcessor<'a> {
    pub fn new(scheme: &'a ColorScheme) -> Self {
        Self {
            scheme,
            forced_format: None,
        }
    }

    /// Uses the given format for every stream instead of detecting it.
    pub fn with_format(mut self, format: Format) -> Self {
        self.forced_format = (format != Format::Unknown).then_some(format);
        self
    }

    /// Processes one stream. `filename` is only used as a format hint.
    pub fn process<R: BufRead, W: Write>(
        &self,
        reader: R,
        writer: &mut W,
        filename: Option<&Path>,
    ) -> StreamResult<StreamSummary> {
        let mut lines = Lines::new(reader);

        let mut lookahead: VecDeque<String> = VecDeque::with_capacity(LOOKAHEAD_LINES);
        while lookahead.len() < LOOKAHEAD_LINES {
            match lines.next() {
                Some(line) => lookahead.push_back(line?),
                None => break,
            }
        }

        let format = self.decide_format(filename, lookahead.make_contiguous());
        if format == Format::Unknown {
            return Err(StreamError::UndecidableFormat);
        }

        let mut summary = StreamSummary {
            format,
            lines: 0,
            records: 0,
        };
        for line in lookahead.drain(..) {
            self.write_line(&line, &mut summary, writer)?;
        }
        for line in lines {
            self.write_line(&line?, &mut summary, writer)?;
        }
        writer.flush()?;

        debug!(
            "Processed {} lines, {} sequences",
            summary.lines, summary.records
        );
        Ok(summary)
    }

    /// Opens and processes a file, using its name as a format hint.
    pub fn process_file<P: AsRef<Path>, W: Write>(
        &self,
        path: P,
        writer: &mut W,
    ) -> StreamResult<StreamSummary> {
        let path = path.as_ref();
        let file = File::open(path)?;
        self.process(BufReader::new(file), writer, Some(path))
    }

    /// Processes files one at a time into the same writer.
    ///
    /// Each file gets its own format decision. A file that cannot be opened,
    /// read or classified is recorded and the next one still runs. A broken
    /// pipe on the writer stops the batch and is returned as an error.
    pub fn process_files<P: AsRef<Path>, W: Write>(
        &self,
        paths: &[P],
        writer: &mut W,
    ) -> StreamResult<BatchReport> {
        let total = paths.len();
        let mut report = BatchReport::default();
        for (i, path) in paths.iter().enumerate() {
            let path: &Path = path.as_ref();
            debug!("[{}/{}] Processing file: {}", i + 1, total, path.display());
            match self.process_file(path, writer) {
                Ok(summary) => {
                    info!(
                        "[{}/{}] Completed: {} ({}, {} lines, {} sequences)",
                        i + 1,
                        total,
                        path.display(),
                        summary.format,
                        summary.lines,
                        summary.records
                    );
                    report.completed.push((path.to_path_buf(), summary));
                }
                Err(StreamError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => {
                    return Err(StreamError::Io(e));
                }
                Err(e) => {
                    error!("Error processing {}: {}", path.display(), e);
                    report.failed.push((path.to_path_buf(), e));
                }
            }
        }
        Ok(report)
    }

    fn decide_format(&self, filename: Option<&Path>, sample: &[String]) -> Format {
        if let Some(format) = self.forced_format {
            debug!("Using forced format: {}", format);
            return format;
        }
        let format = detect_format(filename, sample);
        if format != Format::Unknown {
            debug!("Format detected: {}", format);
        }
        format
    }

    fn write_line<W: Write>(
        &self,
        line: &str,
        summary: &mut StreamSummary,
        writer: &mut W,
    ) -> io::Result<()> {
        writeln!(writer, "{}", classify_and_style(line, summary.format, self.scheme))?;
        summary.lines += 1;
        if is_countable(line, summary.format) {
            summary.records += 1;
        }
        Ok(())
    }
}
