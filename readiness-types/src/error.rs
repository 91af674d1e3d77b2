use crate::QuestionId;

/// Error type for assessment runs.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    /// User quit the assessment (Ctrl+C, chose to quit, etc.)
    #[error("Assessment cancelled by user")]
    Cancelled,

    /// Backend-specific failure (I/O, terminal, etc.)
    #[error("Backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl AssessmentError {
    /// Create a backend error from any error type.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }

    /// Check if this error represents user cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// A submitted answer that does not fit its question.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("unknown question: {0}")]
    UnknownQuestion(QuestionId),

    #[error("invalid answer type for '{id}': expected {expected}, got {actual}")]
    InvalidAnswerType {
        id: QuestionId,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("answer {value} for '{id}' is out of range. min: {min}, max: {max}")]
    ScaleOutOfRange {
        id: QuestionId,
        min: i64,
        max: i64,
        value: i64,
    },

    #[error("'{value}' is not an option of '{id}'")]
    UnknownChoice { id: QuestionId, value: String },
}

/// A question bank that breaks a structural invariant.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DefinitionError {
    #[error("duplicate question id: {0}")]
    DuplicateId(QuestionId),

    #[error("question '{id}' must start with '{expected}'")]
    PrefixMismatch {
        id: QuestionId,
        expected: &'static str,
    },

    #[error("scale of '{0}' needs min <= max and one label per point")]
    BadScale(QuestionId),

    #[error("question '{0}' has no options")]
    NoOptions(QuestionId),
}
