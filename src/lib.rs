//! Read a user-chosen number of integers from a line-oriented input and add them up.

pub mod buffer;
pub mod cli;
pub mod collector;
pub mod config;
mod error;
pub mod input;

pub use self::{
    buffer::{sum, BufferFull, NumberBuffer},
    collector::{run, Collector, Summary, COUNT_PROMPT, RETRY_MESSAGE},
    config::{CountPolicy, EofPolicy, OutputFormat, Settings},
    error::Error,
    input::{read_number, InvalidLine, Reading},
};
