use clap::{Parser, ValueEnum};

use crate::config::{CountPolicy, EofPolicy, OutputFormat, Settings};

/// Ask for a count of integers, read them one per line, and print their sum
#[derive(Debug, Parser)]
#[command(name = "sum-numbers", version, rename_all = "kebab-case")]
pub struct Cli {
    /// How to print the result
    #[arg(long, value_enum, default_value_t = Format::Text, env = "SUM_NUMBERS_FORMAT")]
    pub format: Format,

    /// Accept a negative count and collect no numbers instead of asking again
    #[arg(long, env = "SUM_NUMBERS_ALLOW_NEGATIVE")]
    pub allow_negative_count: bool,

    /// Keep prompting after the input closes, up to N times in a row
    #[arg(long, value_name = "N", env = "SUM_NUMBERS_RETRY_ON_EOF")]
    pub retry_on_eof: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// `Sum: <n>`
    Text,
    /// A JSON object with the count and the sum
    Json,
}

impl Cli {
    pub fn settings(&self) -> Settings {
        Settings {
            format: match self.format {
                Format::Text => OutputFormat::Text,
                Format::Json => OutputFormat::Json,
            },
            count_policy: if self.allow_negative_count {
                CountPolicy::Permissive
            } else {
                CountPolicy::Reject
            },
            eof_policy: match self.retry_on_eof {
                Some(limit) => EofPolicy::Retry { limit },
                None => EofPolicy::Fail,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_to_settings() {
        let cli = Cli::try_parse_from([
            "sum-numbers",
            "--format",
            "json",
            "--allow-negative-count",
            "--retry-on-eof",
            "5",
        ])
        .unwrap();
        assert_eq!(
            cli.settings(),
            Settings {
                format: OutputFormat::Json,
                count_policy: CountPolicy::Permissive,
                eof_policy: EofPolicy::Retry { limit: 5 },
            }
        );
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["sum-numbers", "--format", "xml"]).is_err());
    }
}
