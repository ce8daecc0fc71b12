use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error("failed to read input")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize repository state")]
    State(#[from] serde_json::Error),
}
