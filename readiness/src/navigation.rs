//! The linear section/question state machine.

use chrono::{DateTime, Utc};
use readiness_types::{Question, QuestionBank, Section};
use tracing::debug;

/// What a navigation step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed.
    Stayed,

    /// Moved to another question within the same section.
    Moved { index: usize },

    /// Entered a new section at its first question.
    Entered(Section),
}

/// Recorded completion of each question section, 0 to 100.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SectionProgress {
    pub psychometric: f64,
    pub technical: f64,
    pub wiscar: f64,
}

impl SectionProgress {
    pub fn get(&self, section: Section) -> Option<f64> {
        match section {
            Section::Psychometric => Some(self.psychometric),
            Section::Technical => Some(self.technical),
            Section::Wiscar => Some(self.wiscar),
            Section::Intro | Section::Results => None,
        }
    }

    fn set(&mut self, section: Section, value: f64) {
        match section {
            Section::Psychometric => self.psychometric = value,
            Section::Technical => self.technical = value,
            Section::Wiscar => self.wiscar = value,
            Section::Intro | Section::Results => {}
        }
    }
}

/// Current position in the assessment.
///
/// The question index is always within the current section, or 0 when the
/// section has no questions. `previous` never leaves a section; only `next`,
/// `start` and `go_to` change sections.
#[derive(Debug, Clone, PartialEq)]
pub struct Navigation {
    section: Section,
    index: usize,
    started_at: DateTime<Utc>,
    progress: SectionProgress,
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigation {
    /// A fresh navigation state at the intro.
    pub fn new() -> Self {
        Self {
            section: Section::Intro,
            index: 0,
            started_at: Utc::now(),
            progress: SectionProgress::default(),
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    /// Index of the current question within its section.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Progress recorded for each section so far.
    pub fn progress(&self) -> &SectionProgress {
        &self.progress
    }

    /// Whether the results have been reached.
    pub fn is_finished(&self) -> bool {
        self.section == Section::Results
    }

    /// The question under the cursor, if the current section has one.
    pub fn current_question<'b>(&self, bank: &'b QuestionBank) -> Option<&'b Question> {
        bank.question_at(self.section, self.index)
    }

    /// Leave the intro for the first question section.
    pub fn start(&mut self) -> Transition {
        self.go_to(Section::Psychometric)
    }

    /// Jump to the start of `section`. Responses are not touched.
    pub fn go_to(&mut self, section: Section) -> Transition {
        if self.section == section && self.index == 0 {
            return Transition::Stayed;
        }
        debug!(from = %self.section, to = %section, "entering section");
        self.section = section;
        self.index = 0;
        Transition::Entered(section)
    }

    /// Advance one question, or into the next section after the last one.
    pub fn next(&mut self, bank: &QuestionBank) -> Transition {
        match self.section {
            Section::Intro => self.start(),
            Section::Results => Transition::Stayed,
            section => {
                let len = bank.section_len(section);
                if self.index + 1 < len {
                    self.index += 1;
                    self.progress.set(section, percentage(self.index, len));
                    Transition::Moved { index: self.index }
                } else {
                    self.progress.set(section, 100.0);
                    self.go_to(section.next())
                }
            }
        }
    }

    /// Go back one question within the current section, never below zero.
    pub fn previous(&mut self) -> Transition {
        if self.index == 0 {
            return Transition::Stayed;
        }
        self.index -= 1;
        Transition::Moved { index: self.index }
    }

    /// Put the cursor on a specific question.
    ///
    /// Returns `false` and leaves the state unchanged if `index` is outside
    /// the section.
    pub fn seek(&mut self, bank: &QuestionBank, section: Section, index: usize) -> bool {
        if index >= bank.section_len(section) {
            return false;
        }
        debug!(%section, index, "seeking");
        self.section = section;
        self.index = index;
        true
    }

    /// Back to the intro with a fresh start time and cleared progress.
    pub fn reset(&mut self) {
        debug!("navigation reset");
        *self = Self::new();
    }

    /// Completion of the current section, 0 to 100.
    pub fn section_progress(&self, bank: &QuestionBank) -> f64 {
        match self.section {
            Section::Intro => 0.0,
            Section::Results => 100.0,
            section => percentage(self.index, bank.section_len(section)),
        }
    }

    /// Share of all questions behind the cursor, 0 to 100.
    pub fn overall_progress(&self, bank: &QuestionBank) -> f64 {
        let total = bank.len();
        let completed = match self.section {
            Section::Intro => 0,
            Section::Results => total,
            Section::Psychometric => self.index,
            Section::Technical => bank.section_len(Section::Psychometric) + self.index,
            Section::Wiscar => {
                bank.section_len(Section::Psychometric)
                    + bank.section_len(Section::Technical)
                    + self.index
            }
        };
        percentage(completed, total)
    }
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}
