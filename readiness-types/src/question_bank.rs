use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::{Category, DefinitionError, Question, QuestionId, Section};

/// Display information for one question section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionInfo {
    pub title: String,
    pub description: String,
    /// Rough time to complete, e.g. "8-10 minutes".
    pub duration: String,
}

impl SectionInfo {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            duration: duration.into(),
        }
    }
}

/// The ordered collection of all questions in an assessment.
///
/// Questions are presented section by section. Within a section they keep the
/// order in which they were added. The bank is presentation-agnostic and never
/// changes once built.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionBank {
    /// Optional message shown before the assessment starts.
    pub prelude: Option<String>,

    /// All questions, in presentation order within each category.
    questions: Vec<Question>,

    /// Per-section titles and descriptions.
    sections: HashMap<Category, SectionInfo>,

    /// Optional message shown alongside the results.
    pub epilogue: Option<String>,
}

impl QuestionBank {
    /// Create a new bank with the given questions.
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            prelude: None,
            questions,
            sections: HashMap::new(),
            epilogue: None,
        }
    }

    /// Create an empty bank.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Set the prelude message.
    pub fn with_prelude(mut self, prelude: impl Into<String>) -> Self {
        self.prelude = Some(prelude.into());
        self
    }

    /// Set the epilogue message.
    pub fn with_epilogue(mut self, epilogue: impl Into<String>) -> Self {
        self.epilogue = Some(epilogue.into());
        self
    }

    /// Attach display information to a section.
    pub fn with_section_info(mut self, category: Category, info: SectionInfo) -> Self {
        self.sections.insert(category, info);
        self
    }

    /// Get all questions.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Display information for a section, if any was attached.
    pub fn section_info(&self, section: Section) -> Option<&SectionInfo> {
        section.category().and_then(|c| self.sections.get(&c))
    }

    /// The questions of one section, in order.
    pub fn section_questions(&self, section: Section) -> impl Iterator<Item = &Question> {
        let category = section.category();
        self.questions
            .iter()
            .filter(move |q| Some(q.category()) == category)
    }

    /// Number of questions in a section. Zero for `Intro` and `Results`.
    pub fn section_len(&self, section: Section) -> usize {
        self.section_questions(section).count()
    }

    /// The question at `index` within `section`.
    pub fn question_at(&self, section: Section, index: usize) -> Option<&Question> {
        self.section_questions(section).nth(index)
    }

    /// Look up a question by identifier.
    pub fn get(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    /// The section and in-section index of a question.
    pub fn position_of(&self, id: &QuestionId) -> Option<(Section, usize)> {
        let question = self.get(id)?;
        let section = question.category().section();
        let index = self.section_questions(section).position(|q| q.id() == id)?;
        Some((section, index))
    }

    /// Total number of questions across all sections.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Check if the bank has any questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Check the structural invariants scoring and navigation rely on.
    ///
    /// Identifiers must be unique and carry their category prefix, scale
    /// labels must cover the scale, and choice questions need options.
    pub fn check(&self) -> Result<(), DefinitionError> {
        let mut seen = HashSet::new();
        for question in &self.questions {
            let id = question.id();
            if !seen.insert(id) {
                return Err(DefinitionError::DuplicateId(id.clone()));
            }
            let prefix = question.category().id_prefix();
            if !id.has_prefix(prefix) {
                return Err(DefinitionError::PrefixMismatch {
                    id: id.clone(),
                    expected: prefix,
                });
            }
            match question.kind() {
                crate::AnswerKind::Scale(scale) => {
                    if scale.min > scale.max || !scale.labels_cover_range() {
                        return Err(DefinitionError::BadScale(id.clone()));
                    }
                }
                crate::AnswerKind::SingleChoice { options }
                | crate::AnswerKind::Scenario { options, .. } => {
                    if options.is_empty() {
                        return Err(DefinitionError::NoOptions(id.clone()));
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AnswerKind, ScaleDescriptor};

    fn bank() -> QuestionBank {
        QuestionBank::new(vec![
            Question::new(
                "psych_01",
                "One",
                AnswerKind::Scale(ScaleDescriptor::agreement()),
                Category::Psychometric,
                "motivation",
            ),
            Question::new(
                "tech_01",
                "Two",
                AnswerKind::single_choice(["a", "b"]),
                Category::Technical,
                "knowledge",
            ),
            Question::new(
                "psych_02",
                "Three",
                AnswerKind::Scale(ScaleDescriptor::agreement()),
                Category::Psychometric,
                "interest",
            ),
        ])
    }

    #[test]
    fn sections_keep_order() {
        let bank = bank();
        assert_eq!(bank.section_len(Section::Psychometric), 2);
        assert_eq!(bank.section_len(Section::Technical), 1);
        assert_eq!(bank.section_len(Section::Wiscar), 0);
        assert_eq!(bank.section_len(Section::Intro), 0);
        assert_eq!(
            bank.question_at(Section::Psychometric, 1).map(|q| q.text()),
            Some("Three")
        );
        assert_eq!(
            bank.position_of(&QuestionId::new("psych_02")),
            Some((Section::Psychometric, 1))
        );
    }

    #[test]
    fn check_accepts_well_formed_bank() {
        assert!(bank().check().is_ok());
    }

    #[test]
    fn check_rejects_duplicates_and_prefix_mismatch() {
        let mut questions = bank().questions().to_vec();
        questions.push(questions[0].clone());
        assert!(matches!(
            QuestionBank::new(questions).check(),
            Err(DefinitionError::DuplicateId(_))
        ));

        let wrong = QuestionBank::new(vec![Question::new(
            "tech_09",
            "Misfiled",
            AnswerKind::Scale(ScaleDescriptor::agreement()),
            Category::Wiscar,
            "will",
        )]);
        assert!(matches!(
            wrong.check(),
            Err(DefinitionError::PrefixMismatch { .. })
        ));
    }
}
