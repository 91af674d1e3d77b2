//! Dialoguer backend implementation for the AssessmentBackend trait.

use dialoguer::{Confirm, Select, theme::ColorfulTheme};
use readiness::{Action, AssessmentBackend, AssessmentResult, Prompt, QuestionBank, Section};
use thiserror::Error;
use tracing::debug;

use crate::report;

const PREVIOUS_ITEM: &str = "<- Previous question";

/// Error type for the Dialoguer backend.
#[derive(Debug, Error)]
pub enum DialoguerError {
    /// User cancelled outside of a question (e.g., pressed Ctrl+C on a confirmation).
    #[error("Assessment cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C / Escape)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

/// Dialoguer backend for interactive CLI prompts.
///
/// Every question is a single selection list. Scale questions list their
/// scale labels, choice and scenario questions list their options. From the
/// second question of a section on, an extra entry goes back one question.
#[derive(Debug, Clone)]
pub struct DialoguerBackend {
    /// Use colorful theme for prompts.
    colorful: bool,
    /// Print the text report once results are in.
    report: bool,
}

impl Default for DialoguerBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl DialoguerBackend {
    /// Create a new Dialoguer backend with default (colorful) theme.
    pub fn new() -> Self {
        Self {
            colorful: true,
            report: true,
        }
    }

    /// Create a backend with plain (no color) theme.
    pub fn plain() -> Self {
        Self {
            colorful: false,
            report: true,
        }
    }

    /// Whether `present` prints the text report.
    pub fn with_report(mut self, report: bool) -> Self {
        self.report = report;
        self
    }

    /// Ask whether to start over after the results.
    pub fn confirm_retake(&self) -> Result<bool, DialoguerError> {
        let mut builder: Confirm;
        let _theme;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Confirm::with_theme(&_theme);
        } else {
            builder = Confirm::new();
        }

        builder = builder.with_prompt("Retake the assessment?").default(false);

        match builder.interact() {
            Ok(retake) => Ok(retake),
            Err(e) if is_cancelled(&e) => Err(DialoguerError::Cancelled),
            Err(e) => Err(DialoguerError::Dialoguer(e)),
        }
    }

    fn print_header(prompt: &Prompt<'_>) {
        if prompt.opens_section()
            && let Some(info) = prompt.section_info
        {
            println!();
            println!("== {} ==", info.title);
            println!("{}", info.description);
            println!("Est. time: {}", info.duration);
        }

        println!();
        println!(
            "Question {} of {}  |  {} - {}  |  {:.0}% complete",
            prompt.number,
            prompt.section_len,
            prompt.question.category(),
            prompt.question.subcategory(),
            prompt.overall_progress,
        );

        if let Some(scenario) = prompt.question.scenario() {
            println!();
            println!("Scenario: {scenario}");
        }

        if let Some(rejected) = prompt.rejected {
            println!("Error: {rejected}");
        }
    }
}

impl AssessmentBackend for DialoguerBackend {
    type Error = DialoguerError;

    fn introduce(&mut self, bank: &QuestionBank) -> Result<(), Self::Error> {
        if let Some(prelude) = &bank.prelude {
            println!("{prelude}");
            println!();
        }

        for section in [Section::Psychometric, Section::Technical, Section::Wiscar] {
            if let Some(info) = bank.section_info(section) {
                println!(
                    "  * {} ({} questions, {}): {}",
                    info.title,
                    bank.section_len(section),
                    info.duration,
                    info.description
                );
            }
        }
        Ok(())
    }

    fn ask(&mut self, prompt: &Prompt<'_>) -> Result<Action, Self::Error> {
        Self::print_header(prompt);

        let question = prompt.question;
        let mut items: Vec<&str> = question.option_labels().iter().map(String::as_str).collect();
        let option_count = items.len();
        if prompt.can_go_back {
            items.push(PREVIOUS_ITEM);
        }

        let mut builder: Select;
        let _theme;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Select::with_theme(&_theme);
        } else {
            builder = Select::new();
        }

        builder = builder.with_prompt(question.text()).items(&items);

        // Pre-select the earlier answer when revisiting
        let default = prompt
            .current
            .and_then(|value| question.option_index(value))
            .unwrap_or(0);
        builder = builder.default(default);

        let selection = match builder.interact() {
            Ok(idx) => idx,
            Err(e) if is_cancelled(&e) => {
                debug!(question = %question.id(), "prompt interrupted");
                return Ok(Action::Quit);
            }
            Err(e) => return Err(DialoguerError::Dialoguer(e)),
        };

        if selection >= option_count {
            return Ok(Action::Previous);
        }

        // The index comes from the same option list, so this only fails for
        // a malformed scale.
        Ok(question
            .value_for_option(selection)
            .map_or(Action::Previous, Action::Answer))
    }

    fn present(
        &mut self,
        result: &AssessmentResult,
        bank: &QuestionBank,
    ) -> Result<(), Self::Error> {
        if self.report {
            println!();
            print!("{}", report::Report { result, bank });
        }
        Ok(())
    }
}
