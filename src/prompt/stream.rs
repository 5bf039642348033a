//! Line-oriented prompt channel over arbitrary reader/writer pairs
//!
//! Relays prompts through a host's own streams, e.g. piped stdin/stdout,
//! where no terminal is attached.

use super::interface::PromptChannel;
use crate::error::Result;
use std::io::{BufRead, BufReader, Stdin, Stdout, Write};

/// Reads one line per prompt from `reader`, writes prompts and messages to `writer`.
pub struct StreamChannel<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> StreamChannel<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consumes the channel, returning the underlying writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl StreamChannel<BufReader<Stdin>, Stdout> {
    /// Channel over the process's standard streams.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(std::io::stdin()), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> PromptChannel for StreamChannel<R, W> {
    fn write(&mut self, message: &str) {
        let _ = writeln!(self.writer, "{message}");
        let _ = self.writer.flush();
    }

    fn read(&mut self, prompt: &str, default: &str) -> Result<String> {
        let _ = write!(self.writer, "{prompt} ");
        let _ = self.writer.flush();

        let mut line = String::new();
        // End of input reads as an empty answer
        self.reader.read_line(&mut line)?;
        let input = line.trim_end_matches(['\r', '\n']);

        if input.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(input.to_string())
        }
    }
}
