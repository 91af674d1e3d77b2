use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{QuestionId, ResponseValue};

/// Error type for response access operations.
#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    #[error("Missing response for question: {0}")]
    MissingResponse(QuestionId),

    #[error("Type mismatch for question '{id}': expected {expected}, got {actual}")]
    TypeMismatch {
        id: QuestionId,
        expected: &'static str,
        actual: &'static str,
    },
}

/// A captured answer to one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub question_id: QuestionId,
    pub value: ResponseValue,
    pub answered_at: DateTime<Utc>,
}

impl Response {
    /// Create a response stamped with the current time.
    pub fn new(question_id: impl Into<QuestionId>, value: impl Into<ResponseValue>) -> Self {
        Self::at(question_id, value, Utc::now())
    }

    /// Create a response with an explicit capture time.
    pub fn at(
        question_id: impl Into<QuestionId>,
        value: impl Into<ResponseValue>,
        answered_at: DateTime<Utc>,
    ) -> Self {
        Self {
            question_id: question_id.into(),
            value: value.into(),
            answered_at,
        }
    }
}

/// Collected responses from an assessment.
///
/// Holds at most one response per question. Recording a new answer for an
/// already answered question replaces the old one and moves it to the end of
/// the insertion order, so `latest()` is always the most recent answer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Responses {
    values: IndexMap<QuestionId, Response>,
}

impl Responses {
    /// Create a new empty responses collection.
    pub fn new() -> Self {
        Self {
            values: IndexMap::new(),
        }
    }

    /// Record a response, replacing any earlier answer to the same question.
    ///
    /// Returns the replaced response, if any.
    pub fn record(&mut self, response: Response) -> Option<Response> {
        let previous = self.values.shift_remove(&response.question_id);
        self.values.insert(response.question_id.clone(), response);
        previous
    }

    /// Record a value for a question, stamped with the current time.
    pub fn insert(&mut self, id: impl Into<QuestionId>, value: impl Into<ResponseValue>) {
        self.record(Response::new(id, value));
    }

    /// Get the response for the given question.
    pub fn get(&self, id: &QuestionId) -> Option<&Response> {
        self.values.get(id)
    }

    /// Get the answered value for the given question.
    pub fn value(&self, id: &QuestionId) -> Option<&ResponseValue> {
        self.values.get(id).map(|r| &r.value)
    }

    /// Check if a response exists for the given question.
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.values.contains_key(id)
    }

    /// Remove the response for the given question.
    pub fn remove(&mut self, id: &QuestionId) -> Option<Response> {
        self.values.shift_remove(id)
    }

    /// The most recently recorded response.
    pub fn latest(&self) -> Option<&Response> {
        self.values.last().map(|(_, r)| r)
    }

    /// Iterate over responses in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Response> {
        self.values.values()
    }

    /// Iterate over responses whose question id starts with `prefix`.
    pub fn with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a Response> + 'a {
        self.values
            .values()
            .filter(move |r| r.question_id.has_prefix(prefix))
    }

    /// Get the number of responses.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no responses.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Drop all responses.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    // === Convenience accessors ===

    /// Get a scale value for the given question.
    pub fn get_scale(&self, id: &QuestionId) -> Result<i64, ResponseError> {
        match self.value(id) {
            Some(ResponseValue::Scale(v)) => Ok(*v),
            Some(other) => Err(ResponseError::TypeMismatch {
                id: id.clone(),
                expected: "scale",
                actual: other.type_name(),
            }),
            None => Err(ResponseError::MissingResponse(id.clone())),
        }
    }

    /// Get a choice label for the given question.
    pub fn get_choice(&self, id: &QuestionId) -> Result<&str, ResponseError> {
        match self.value(id) {
            Some(ResponseValue::Choice(s)) => Ok(s),
            Some(other) => Err(ResponseError::TypeMismatch {
                id: id.clone(),
                expected: "choice",
                actual: other.type_name(),
            }),
            None => Err(ResponseError::MissingResponse(id.clone())),
        }
    }
}

impl IntoIterator for Responses {
    type Item = Response;
    type IntoIter = indexmap::map::IntoValues<QuestionId, Response>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_values()
    }
}

impl<'a> IntoIterator for &'a Responses {
    type Item = &'a Response;
    type IntoIter = indexmap::map::Values<'a, QuestionId, Response>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.values()
    }
}
