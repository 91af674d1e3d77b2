//! The explicit state object of one assessment run.

use chrono::{Duration, Utc};
use readiness_types::{
    AssessmentResult, DefinitionError, Prompt, Question, QuestionBank, QuestionId, Response,
    ResponseValue, Responses, Section, ValidationError,
};
use tracing::{debug, info};

use crate::config::ScoringConfig;
use crate::navigation::{Navigation, Transition};
use crate::scoring;

/// One user's pass through a question bank.
///
/// Owns the navigation state, the collected responses and the result once it
/// has been computed. Entering `Results` scores the responses.
#[derive(Debug, Clone)]
pub struct Session {
    bank: QuestionBank,
    config: ScoringConfig,
    navigation: Navigation,
    responses: Responses,
    result: Option<AssessmentResult>,
}

impl Session {
    /// Create a session with the default scoring configuration.
    pub fn new(bank: QuestionBank) -> Self {
        Self::with_config(bank, ScoringConfig::default())
    }

    pub fn with_config(bank: QuestionBank, config: ScoringConfig) -> Self {
        Self {
            bank,
            config,
            navigation: Navigation::new(),
            responses: Responses::new(),
            result: None,
        }
    }

    /// Like [`Session::with_config`], but refuses a bank that breaks the
    /// structural rules of [`QuestionBank::check`].
    pub fn checked(bank: QuestionBank, config: ScoringConfig) -> Result<Self, DefinitionError> {
        bank.check()?;
        Ok(Self::with_config(bank, config))
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    pub fn responses(&self) -> &Responses {
        &self.responses
    }

    /// The result computed on entering `Results`, if that has happened.
    pub fn result(&self) -> Option<&AssessmentResult> {
        self.result.as_ref()
    }

    pub fn section(&self) -> Section {
        self.navigation.section()
    }

    pub fn is_finished(&self) -> bool {
        self.navigation.is_finished()
    }

    /// Time since the session (or its last reset) started.
    pub fn elapsed(&self) -> Duration {
        Utc::now() - self.navigation.started_at()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.navigation.current_question(&self.bank)
    }

    /// The prompt for the current question, if there is one.
    pub fn prompt<'a>(&'a self, rejected: Option<&'a ValidationError>) -> Option<Prompt<'a>> {
        let question = self.current_question()?;
        let section = self.section();
        let index = self.navigation.index();
        Some(Prompt {
            question,
            section,
            section_info: self.bank.section_info(section),
            number: index + 1,
            section_len: self.bank.section_len(section),
            overall_progress: self.navigation.overall_progress(&self.bank),
            current: self.responses.value(question.id()),
            can_go_back: index > 0,
            rejected,
        })
    }

    /// Validate and store an answer, replacing any earlier one.
    ///
    /// Returns the replaced response. An invalid answer leaves the
    /// responses untouched.
    pub fn record(
        &mut self,
        id: impl Into<QuestionId>,
        value: impl Into<ResponseValue>,
    ) -> Result<Option<Response>, ValidationError> {
        let id = id.into();
        let value = value.into();
        let question = self
            .bank
            .get(&id)
            .ok_or_else(|| ValidationError::UnknownQuestion(id.clone()))?;
        question.validate(&value)?;
        debug!(question = %id, ?value, "response recorded");
        Ok(self.responses.record(Response::new(id, value)))
    }

    /// Leave the intro.
    pub fn start(&mut self) -> Transition {
        let transition = self.navigation.start();
        self.after(transition);
        transition
    }

    /// Advance one question; scores the responses when reaching `Results`.
    pub fn next(&mut self) -> Transition {
        let transition = self.navigation.next(&self.bank);
        self.after(transition);
        transition
    }

    /// Go back one question within the section.
    pub fn previous(&mut self) -> Transition {
        self.navigation.previous()
    }

    /// Jump to the start of a section, keeping all responses.
    pub fn go_to(&mut self, section: Section) -> Transition {
        let transition = self.navigation.go_to(section);
        self.after(transition);
        transition
    }

    /// Discard all responses and return to the intro.
    pub fn reset(&mut self) {
        info!(discarded = self.responses.len(), "assessment reset");
        self.navigation.reset();
        self.responses.clear();
        self.result = None;
    }

    /// Move the cursor past the most recently answered question.
    ///
    /// With no responses this starts at the first question. If the latest
    /// answer was to the last question overall, the session finishes.
    pub fn resume(&mut self) -> Transition {
        let position = self
            .responses
            .latest()
            .and_then(|r| self.bank.position_of(&r.question_id));
        match position {
            Some((section, index)) => {
                self.navigation.seek(&self.bank, section, index);
                self.next()
            }
            None => self.start(),
        }
    }

    /// Score the current responses without changing state.
    pub fn calculate(&self) -> AssessmentResult {
        scoring::score(&self.responses, &self.config)
    }

    fn after(&mut self, transition: Transition) {
        if transition == Transition::Entered(Section::Results) {
            self.result = Some(self.calculate());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::stakeholder_coaching;
    use readiness_types::{AnswerKind, Category, ScaleDescriptor};

    #[test]
    fn checked_refuses_malformed_bank() {
        assert!(Session::checked(stakeholder_coaching(), ScoringConfig::default()).is_ok());

        let q = |id: &str, category| {
            Question::new(
                id,
                id,
                AnswerKind::Scale(ScaleDescriptor::agreement()),
                category,
                "test",
            )
        };
        let duplicate = QuestionBank::new(vec![
            q("psych_01", Category::Psychometric),
            q("psych_01", Category::Psychometric),
        ]);
        assert_eq!(
            Session::checked(duplicate, ScoringConfig::default()).err(),
            Some(DefinitionError::DuplicateId("psych_01".into()))
        );

        let misplaced = QuestionBank::new(vec![q("tech_01", Category::Psychometric)]);
        assert!(matches!(
            Session::checked(misplaced, ScoringConfig::default()),
            Err(DefinitionError::PrefixMismatch { .. })
        ));
    }

    #[test]
    fn record_validates_against_bank() {
        let mut session = Session::new(stakeholder_coaching());

        assert!(session.record("psych_01", 4).is_ok());
        assert_eq!(
            session.record("psych_99", 4),
            Err(ValidationError::UnknownQuestion("psych_99".into()))
        );
        assert!(matches!(
            session.record("psych_01", 9),
            Err(ValidationError::ScaleOutOfRange { .. })
        ));
        assert!(matches!(
            session.record("tech_01", 2),
            Err(ValidationError::InvalidAnswerType { .. })
        ));
        assert_eq!(session.responses().len(), 1);
        assert_eq!(
            session.responses().get_scale(&"psych_01".into()).unwrap(),
            4
        );
    }

    #[test]
    fn answering_twice_keeps_latest() {
        let mut session = Session::new(stakeholder_coaching());
        session.record("psych_02", 2).unwrap();
        let replaced = session.record("psych_02", 5).unwrap();

        assert_eq!(replaced.map(|r| r.value), Some(ResponseValue::Scale(2)));
        assert_eq!(session.responses().len(), 1);
        assert_eq!(
            session.responses().get_scale(&"psych_02".into()).unwrap(),
            5
        );
    }

    #[test]
    fn prompt_reflects_position() {
        let mut session = Session::new(stakeholder_coaching());
        assert!(session.prompt(None).is_none());

        session.start();
        session.record("psych_01", 3).unwrap();
        let prompt = session.prompt(None).unwrap();
        assert_eq!(prompt.question.id().as_str(), "psych_01");
        assert_eq!(prompt.number, 1);
        assert_eq!(prompt.section_len, 5);
        assert!(prompt.opens_section());
        assert!(!prompt.can_go_back);
        assert_eq!(prompt.current, Some(&ResponseValue::Scale(3)));

        session.next();
        let prompt = session.prompt(None).unwrap();
        assert_eq!(prompt.number, 2);
        assert!(prompt.can_go_back);
        assert_eq!(prompt.current, None);
    }

    #[test]
    fn result_is_computed_on_entering_results() {
        let mut session = Session::new(stakeholder_coaching());
        session.go_to(Section::Wiscar);
        assert!(session.result().is_none());
        for _ in 0..session.bank().section_len(Section::Wiscar) {
            session.next();
        }
        assert!(session.is_finished());
        assert!(session.result().is_some());
    }

    #[test]
    fn reset_clears_everything() {
        let mut session = Session::new(stakeholder_coaching());
        session.start();
        session.record("psych_01", 5).unwrap();
        session.go_to(Section::Results);
        assert!(session.result().is_some());

        session.reset();
        assert_eq!(session.section(), Section::Intro);
        assert!(session.responses().is_empty());
        assert!(session.result().is_none());
    }

    #[test]
    fn resume_continues_after_latest_answer() {
        let mut session = Session::new(stakeholder_coaching());
        assert_eq!(session.resume(), Transition::Entered(Section::Psychometric));

        session.record("psych_01", 4).unwrap();
        session.record("tech_02", "Reflecting back what you heard").unwrap();
        session.go_to(Section::Intro);

        session.resume();
        assert_eq!(session.section(), Section::Technical);
        assert_eq!(session.navigation().index(), 2);

        session.record("psych_05", "Recognition and professional status").unwrap();
        session.resume();
        assert_eq!(session.section(), Section::Technical);
        assert_eq!(session.navigation().index(), 0);
    }
}
