use crate::{
    AssessmentResult, Question, QuestionBank, ResponseValue, Section, SectionInfo, ValidationError,
};

/// Everything a backend needs to present one question.
#[derive(Debug, Clone, Copy)]
pub struct Prompt<'a> {
    /// The question to ask.
    pub question: &'a Question,

    /// The section the question belongs to.
    pub section: Section,

    /// Title and description of the section, if the bank provides them.
    pub section_info: Option<&'a SectionInfo>,

    /// 1-based position of the question within its section.
    pub number: usize,

    /// Number of questions in the section.
    pub section_len: usize,

    /// Share of the whole assessment already behind the user, 0 to 100.
    pub overall_progress: f64,

    /// The answer given earlier, when revisiting a question.
    pub current: Option<&'a ResponseValue>,

    /// Whether there is a previous question in this section to go back to.
    pub can_go_back: bool,

    /// Why the last answer to this question was rejected, if it was.
    pub rejected: Option<&'a ValidationError>,
}

impl Prompt<'_> {
    /// Whether this is the first question of its section.
    pub fn opens_section(&self) -> bool {
        self.number == 1
    }
}

/// What the user did in response to a prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Record this answer and move on.
    Answer(ResponseValue),

    /// Go back to the previous question of the section.
    Previous,

    /// Stop the assessment.
    Quit,
}

/// Trait for presentation layers that drive an assessment.
///
/// Backends are asked one question at a time and report what the user did.
/// The driver owns all state: it records answers, moves through sections and
/// computes the result, then hands it back to the backend for display.
pub trait AssessmentBackend {
    /// The error type for this backend.
    type Error: Into<anyhow::Error>;

    /// Show the introduction before the first question.
    ///
    /// The default implementation shows nothing.
    fn introduce(&mut self, _bank: &QuestionBank) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Ask a single question.
    ///
    /// Invalid answers are reported back through `Prompt::rejected` on the
    /// next call for the same question.
    fn ask(&mut self, prompt: &Prompt<'_>) -> Result<Action, Self::Error>;

    /// Show the computed result.
    ///
    /// The default implementation shows nothing.
    fn present(
        &mut self,
        _result: &AssessmentResult,
        _bank: &QuestionBank,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}
