use thiserror::Error;

/// Contract violations raised by `QuizSession`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("a quiz session needs at least one question")]
    Empty,
    #[error("invalid answer label '{0}', expected one of a, b, c, d")]
    InvalidLabel(String),
}

#[derive(Debug, Error)]
pub enum QuizError {
    #[error(transparent)]
    Database(#[from] rusqlite::Error),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("no questions match this selection")]
    NoQuestions,
    #[error("select at least one {0}")]
    EmptySelection(&'static str),
    #[error("{0}")]
    InvalidArgument(String),
}
