//! Scripted backend for running assessments without user interaction.
//!
//! `ScriptedBackend` answers questions from a pre-defined script. This is
//! useful for testing scoring and navigation end to end.
//!
//! # Example
//!
//! ```rust
//! use readiness::{ScriptedBackend, Session, bank, run};
//!
//! let mut session = Session::new(bank::stakeholder_coaching());
//! let mut backend = ScriptedBackend::new()
//!     .with_answer("psych_01", 5)
//!     .with_fallback_option(0);
//!
//! let result = run(&mut session, &mut backend).unwrap();
//! assert!(result.overall_score > 0.0);
//! ```

use std::collections::{HashMap, VecDeque};

use readiness_types::{
    Action, AssessmentBackend, AssessmentResult, Prompt, QuestionBank, QuestionId, ResponseValue,
};

/// A backend that replays pre-configured answers.
#[derive(Debug, Clone, Default)]
pub struct ScriptedBackend {
    answers: HashMap<QuestionId, ResponseValue>,
    detours: HashMap<QuestionId, VecDeque<Action>>,
    fallback_option: Option<usize>,
    asked: Vec<QuestionId>,
    presented: Option<AssessmentResult>,
}

/// Error type for ScriptedBackend.
#[derive(Debug, thiserror::Error)]
pub enum ScriptedBackendError {
    #[error("No scripted answer for question: {0}")]
    MissingAnswer(QuestionId),

    #[error("Scripted answer for '{id}' was rejected: {message}")]
    Rejected { id: QuestionId, message: String },
}

impl ScriptedBackend {
    /// Create a new empty scripted backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer the given question with `value`.
    pub fn with_answer(
        mut self,
        id: impl Into<QuestionId>,
        value: impl Into<ResponseValue>,
    ) -> Self {
        self.answers.insert(id.into(), value.into());
        self
    }

    /// Before answering the given question, perform `action` once.
    ///
    /// Several actions for the same question are performed in order.
    pub fn with_action(mut self, id: impl Into<QuestionId>, action: Action) -> Self {
        self.detours.entry(id.into()).or_default().push_back(action);
        self
    }

    /// Answer every unscripted question with the option at `index`, or the
    /// last option if the question has fewer.
    pub fn with_fallback_option(mut self, index: usize) -> Self {
        self.fallback_option = Some(index);
        self
    }

    /// Question ids in the order they were asked, repeats included.
    pub fn asked(&self) -> &[QuestionId] {
        &self.asked
    }

    /// The result handed to `present`, if the run got that far.
    pub fn presented(&self) -> Option<&AssessmentResult> {
        self.presented.as_ref()
    }

    fn fallback(&self, prompt: &Prompt<'_>) -> Option<ResponseValue> {
        let index = self.fallback_option?;
        let last = prompt.question.option_labels().len().checked_sub(1)?;
        prompt.question.value_for_option(index.min(last))
    }
}

impl AssessmentBackend for ScriptedBackend {
    type Error = ScriptedBackendError;

    fn ask(&mut self, prompt: &Prompt<'_>) -> Result<Action, Self::Error> {
        let id = prompt.question.id();
        self.asked.push(id.clone());

        if let Some(action) = self.detours.get_mut(id).and_then(VecDeque::pop_front) {
            return Ok(action);
        }

        // Replaying the same answer would be rejected forever.
        if let Some(rejection) = prompt.rejected {
            return Err(ScriptedBackendError::Rejected {
                id: id.clone(),
                message: rejection.to_string(),
            });
        }

        self.answers
            .get(id)
            .cloned()
            .or_else(|| self.fallback(prompt))
            .map(Action::Answer)
            .ok_or_else(|| ScriptedBackendError::MissingAnswer(id.clone()))
    }

    fn present(
        &mut self,
        result: &AssessmentResult,
        _bank: &QuestionBank,
    ) -> Result<(), Self::Error> {
        self.presented = Some(result.clone());
        Ok(())
    }
}
