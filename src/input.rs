//! Line-at-a-time integer reading.

use std::io::{self, BufRead};

/// The outcome of reading one line from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reading {
    /// The whole line was a decimal integer.
    Number(i64),
    /// A line was consumed but did not hold a usable integer.
    Invalid(InvalidLine),
    /// The input has no more bytes.
    Closed,
}

/// Why a line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidLine {
    #[error("empty line")]
    Empty,
    #[error("line is not valid UTF-8")]
    NotUtf8,
    #[error("not a decimal integer")]
    Malformed,
    /// `+7`, `007` and `-0` parse, but would not print back as written.
    #[error("integer is not written in canonical form")]
    NonCanonical,
    #[error("integer does not fit in 64 bits")]
    OutOfRange,
    /// The input ended before the line terminator.
    #[error("line is missing its terminator")]
    Unterminated,
}

/// Reads one line from `input` and parses it as a base-10 integer.
///
/// Exactly one line is consumed per call, whatever the outcome. The line buffer
/// lives only for the duration of the call.
pub fn read_number<R: BufRead + ?Sized>(input: &mut R) -> io::Result<Reading> {
    let mut line = Vec::new();
    if input.read_until(b'\n', &mut line)? == 0 {
        return Ok(Reading::Closed);
    }
    if line.pop() != Some(b'\n') {
        return Ok(Reading::Invalid(InvalidLine::Unterminated));
    }
    let reading = match std::str::from_utf8(&line) {
        Ok(text) => match parse_integer(text) {
            Ok(n) => Reading::Number(n),
            Err(reason) => Reading::Invalid(reason),
        },
        Err(_) => Reading::Invalid(InvalidLine::NotUtf8),
    };
    log::trace!("read {:?} from {} bytes", reading, line.len() + 1);
    Ok(reading)
}

/// Parses `text` as an integer in canonical decimal form, ignoring surrounding
/// ASCII whitespace.
pub fn parse_integer(text: &str) -> Result<i64, InvalidLine> {
    let text = text.trim_matches(|c: char| c.is_ascii_whitespace());
    if text.is_empty() {
        return Err(InvalidLine::Empty);
    }
    if text.starts_with('+') {
        return Err(InvalidLine::NonCanonical);
    }
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidLine::Malformed);
    }
    if (digits.len() > 1 && digits.starts_with('0')) || text == "-0" {
        return Err(InvalidLine::NonCanonical);
    }
    // Only overflow is left once the shape has been checked.
    text.parse().map_err(|_| InvalidLine::OutOfRange)
}
