use thiserror::Error;

#[derive(Debug, Error)]
pub enum DepbotError {
    #[error("Interactive prompts are not supported in this environment.")]
    NotInteractive,

    #[error("input closed before a {0} was chosen")]
    PromptClosed(String),

    #[error("invalid {kind} '{value}': expected one of {expected}")]
    InvalidChoice {
        kind: &'static str,
        value: String,
        expected: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DepbotError>;
