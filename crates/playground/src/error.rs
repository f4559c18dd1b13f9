/// Error loading or validating [`Config`](crate::config::Config).
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable holds a value that cannot be parsed.
    #[error("config: cannot parse {key}={value:?}: {reason}")]
    Parse {
        /// variable name
        key: String,
        /// raw value
        value: String,
        /// what was expected
        reason: String,
    },
    /// Values parsed but are not usable together.
    #[error("config validation: {0}")]
    Validation(String),
}

/// Error surfaced by the playground. The tokenizer itself never fails; these
/// come from parsing caller input and from the terminal.
#[derive(Debug, thiserror::Error)]
pub enum PlaygroundError {
    /// Startup configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Decode input is not a JSON array of integers.
    #[error("expected a JSON array of integers, e.g. [4, 5]: {0}")]
    Indices(#[source] serde_json::Error),
    /// A command that takes no arguments was given some.
    #[error("{command} takes no arguments, got {argument:?}")]
    UnexpectedArgument {
        /// the command as typed
        command: String,
        /// the trailing text
        argument: String,
    },
    /// Rendering a result as JSON failed.
    #[error("cannot render output: {0}")]
    Render(#[source] serde_json::Error),
    /// Reading input or writing output failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
