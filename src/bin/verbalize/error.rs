use thiserror::Error;

/// Error whilst turning command-line arguments into text
#[derive(Error, Debug, PartialEq)]
pub enum CliError {
    #[error("{argument} must not be empty")]
    EmptyArgument { argument: &'static str },
    #[error("Expected at least one item to list")]
    EmptyList,
}
