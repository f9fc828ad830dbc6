/// How the final result is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `Sum: <n>`
    #[default]
    Text,
    /// `{"count":<n>,"sum":<n>}`
    Json,
}

/// What to do with a negative count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CountPolicy {
    /// Treat it like any other invalid entry and ask again.
    #[default]
    Reject,
    /// Accept it and collect nothing.
    Permissive,
}

/// What to do when the input closes while numbers are still missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EofPolicy {
    /// Stop with [`crate::Error::InputClosed`].
    #[default]
    Fail,
    /// Prompt and read again, at most `limit` times in a row.
    Retry { limit: u32 },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    pub count_policy: CountPolicy,
    pub eof_policy: EofPolicy,
}
