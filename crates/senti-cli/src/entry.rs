//! Grouping typed or piped lines into one form entry

use std::io::BufRead;

use senti_core::Result;

use crate::command::Command;

/// Collects lines until an entry is complete.
///
/// A command line (`:temp 0.3`, `:about`, ...) typed as the first line is an
/// entry by itself. Anything else is text and keeps accumulating until a blank
/// line or end of input, so a pasted paragraph is analyzed as one request.
#[derive(Debug, Default)]
pub struct EntryBuffer {
    lines: Vec<String>,
}

impl EntryBuffer {
    /// Feed one line; returns the entry once it is complete
    pub fn push_line(&mut self, line: &str) -> Option<String> {
        let line = line.trim_end_matches(['\r', '\n']);

        if self.lines.is_empty() && Command::is_standalone(line) {
            return Some(line.to_string());
        }
        if line.trim().is_empty() {
            return Some(self.take());
        }

        self.lines.push(line.to_string());
        None
    }

    /// Add a pasted block as text, blank lines included
    pub fn push_block(&mut self, text: &str) {
        self.lines.extend(text.lines().map(str::to_string));
    }

    /// Flush what is left at end of input
    pub fn finish(&mut self) -> Option<String> {
        if self.lines.is_empty() {
            None
        } else {
            Some(self.take())
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn take(&mut self) -> String {
        std::mem::take(&mut self.lines).join("\n")
    }
}

/// Read one entry from a buffered reader. `None` once the input is exhausted.
pub fn read_entry<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut entry = EntryBuffer::default();
    let mut line = String::new();

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Ok(entry.finish());
        }
        if let Some(complete) = entry.push_line(&line) {
            return Ok(Some(complete));
        }
    }
}
