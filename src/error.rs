use thiserror::Error;

/// Failures raised by the note engine and session layer. The UI wraps these in
/// `anyhow` when they need extra context.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrainerError {
    #[error("cell (string {string}, fret {fret}) is outside the fretboard")]
    CellOutOfRange { string: usize, fret: usize },

    #[error("invalid {what}: {value:?}")]
    InvalidArgument { what: &'static str, value: String },

    #[error("invalid string order: {0}")]
    InvalidStringOrder(String),
}

impl TrainerError {
    pub(crate) fn invalid(what: &'static str, value: impl Into<String>) -> Self {
        TrainerError::InvalidArgument {
            what,
            value: value.into(),
        }
    }
}
