//! The interactive prompt-and-read session.
//!
//! A session moves through three states: it waits for a count, it fills a buffer of
//! that many slots, and once every slot is written it reports the sum. Malformed
//! lines are reported to the user and retried in place. Neither the count nor any
//! filled slot changes because of them.

use std::io::{self, BufRead, Write};

use log::{debug, trace, warn};
use serde::Serialize;

use crate::{
    buffer::{self, NumberBuffer},
    config::{CountPolicy, EofPolicy, OutputFormat, Settings},
    input::{read_number, Reading},
    Error,
};

/// Printed once before the count is read.
pub const COUNT_PROMPT: &str = "How many numbers do you want to add up?";
/// Printed after every rejected line.
pub const RETRY_MESSAGE: &str = "Please enter a valid number!";

/// The result of a completed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub sum: i64,
}

pub struct Collector<R, W> {
    input: R,
    output: W,
    settings: Settings,
}

impl<R: BufRead, W: Write> Collector<R, W> {
    pub fn new(input: R, output: W, settings: Settings) -> Self {
        Self {
            input,
            output,
            settings,
        }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Asks how many numbers to collect and reads until a usable count arrives.
    ///
    /// Returns [`Error::CountUnavailable`] if the input closes first.
    pub fn collect_count(&mut self) -> Result<u64, Error> {
        writeln!(self.output, "{COUNT_PROMPT}")?;
        self.output.flush()?;
        loop {
            match read_number(&mut self.input)? {
                Reading::Number(n) => match (u64::try_from(n), self.settings.count_policy) {
                    (Ok(count), _) => {
                        debug!("collecting {count} numbers");
                        return Ok(count);
                    }
                    (Err(_), CountPolicy::Permissive) => {
                        warn!("negative count {n}, collecting nothing");
                        return Ok(0);
                    }
                    (Err(_), CountPolicy::Reject) => {
                        warn!("rejected negative count {n}");
                        self.retry()?;
                    }
                },
                Reading::Invalid(reason) => {
                    warn!("rejected count: {reason}");
                    self.retry()?;
                }
                Reading::Closed => return Err(Error::CountUnavailable),
            }
        }
    }

    /// Fills a buffer of exactly `count` numbers, prompting `i<k>: ` before each read.
    pub fn collect_numbers(&mut self, count: u64) -> Result<NumberBuffer, Error> {
        let mut buffer = NumberBuffer::with_len(count)?;
        let mut closed_reads = 0u32;
        while !buffer.is_complete() {
            write!(self.output, "i{}: ", buffer.filled() + 1)?;
            self.output.flush()?;
            match read_number(&mut self.input)? {
                Reading::Number(n) => {
                    closed_reads = 0;
                    let index = buffer.push(n)?;
                    trace!("slot {index} = {n}, {} remaining", buffer.remaining());
                }
                Reading::Invalid(reason) => {
                    closed_reads = 0;
                    warn!("rejected entry {}: {reason}", buffer.filled() + 1);
                    self.retry()?;
                }
                Reading::Closed => {
                    let limit = match self.settings.eof_policy {
                        EofPolicy::Fail => 0,
                        EofPolicy::Retry { limit } => limit,
                    };
                    closed_reads += 1;
                    if closed_reads > limit {
                        return Err(Error::InputClosed {
                            filled: buffer.filled(),
                            expected: buffer.len(),
                        });
                    }
                    warn!("input closed, retrying ({closed_reads}/{limit})");
                    writeln!(self.output)?;
                }
            }
        }
        debug!("buffer complete with {} numbers", buffer.len());
        Ok(buffer)
    }

    /// Runs a whole session and writes the result line.
    pub fn run(&mut self) -> Result<Summary, Error> {
        let count = self.collect_count()?;
        let buffer = self.collect_numbers(count)?;
        let summary = Summary {
            count: buffer.len(),
            sum: buffer::sum(&buffer)?,
        };
        drop(buffer);
        self.report(&summary)?;
        Ok(summary)
    }

    fn report(&mut self, summary: &Summary) -> io::Result<()> {
        match self.settings.format {
            OutputFormat::Text => writeln!(self.output, "Sum: {}", summary.sum)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.output, summary)?;
                writeln!(self.output)?;
            }
        }
        self.output.flush()
    }

    fn retry(&mut self) -> io::Result<()> {
        writeln!(self.output, "{RETRY_MESSAGE}")?;
        self.output.flush()
    }
}

/// Runs one session over `input` and `output`.
pub fn run<R: BufRead, W: Write>(input: R, output: W, settings: Settings) -> Result<Summary, Error> {
    Collector::new(input, output, settings).run()
}
