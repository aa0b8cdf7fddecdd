use thiserror::Error;

#[derive(Debug, Error)]
pub enum CueError {
    #[error("A cue sheet cannot contain more than 999 tracks, got {0}")]
    TooManyTracks(usize),

    #[error("Line {line_number} is not a valid track line: {content:?}")]
    MalformedLine { line_number: usize, content: String },

    #[error("Line {line_number} has a timestamp too large to convert: {content:?}")]
    TimestampOutOfRange { line_number: usize, content: String },

    #[error(transparent)]
    InvalidPattern(#[from] regex::Error),

    #[error("Track pattern is missing the named capture group: {0}")]
    MissingCaptureGroup(&'static str),

    #[error("Invalid remark, expected KEY=VALUE: {0}")]
    InvalidRemark(String),
}

/// A numeric timestamp group that matched but does not fit into the index arithmetic.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("Timestamp value out of range: {0}")]
pub struct TimestampOutOfRange(pub String);

pub type CueResult<T> = Result<T, CueError>;
