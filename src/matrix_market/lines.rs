//! Line-at-a-time reader with line number tracking

use std::io::{self, BufRead};

use crate::constants::COMMENT_MARKER;

/// Streams lines from a buffered reader through one reused buffer.
///
/// Line numbers are 1-based and count every physical line consumed,
/// including comments and blanks, so errors point at the real file line.
pub struct LineReader<R> {
    reader: R,
    buffer: String,
    line_number: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::new(),
            line_number: 0,
        }
    }

    /// Number of physical lines consumed so far
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Reads the next physical line without its terminator, paired with
    /// its line number.
    ///
    /// Returns `Ok(None)` at end of input.
    pub fn next_line(&mut self) -> io::Result<Option<(usize, &str)>> {
        self.buffer.clear();
        if self.reader.read_line(&mut self.buffer)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;
        Ok(Some((
            self.line_number,
            self.buffer.trim_end_matches(['\n', '\r']),
        )))
    }

    /// Reads the next line that is neither blank nor a comment
    pub fn next_data_line(&mut self) -> io::Result<Option<(usize, &str)>> {
        loop {
            self.buffer.clear();
            if self.reader.read_line(&mut self.buffer)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;
            if !is_skippable(&self.buffer) {
                return Ok(Some((
                    self.line_number,
                    self.buffer.trim_end_matches(['\n', '\r']),
                )));
            }
        }
    }
}

/// Blank lines and `%` comment lines carry no data
pub fn is_skippable(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER)
}
