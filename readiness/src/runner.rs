use readiness_types::{
    Action, AssessmentBackend, AssessmentError, AssessmentResult, Section, ValidationError,
};
use tracing::{debug, warn};

use crate::Session;

/// Drive a session to its results through a backend.
///
/// Starts the session if it is still at the intro, then asks each question in
/// turn. Invalid answers are sent back to the backend with the rejection
/// reason until a valid one arrives. The result is presented by the backend
/// before it is returned.
pub fn run<B: AssessmentBackend>(
    session: &mut Session,
    backend: &mut B,
) -> Result<AssessmentResult, AssessmentError> {
    backend
        .introduce(session.bank())
        .map_err(AssessmentError::backend)?;

    if session.section() == Section::Intro {
        session.start();
    }

    let mut rejected: Option<ValidationError> = None;
    while !session.is_finished() {
        let Some(prompt) = session.prompt(rejected.as_ref()) else {
            // Section without questions.
            session.next();
            continue;
        };
        let id = prompt.question.id().clone();
        let action = backend.ask(&prompt).map_err(AssessmentError::backend)?;

        match action {
            Action::Answer(value) => match session.record(&id, value) {
                Ok(_) => {
                    rejected = None;
                    session.next();
                }
                Err(err) => {
                    warn!(question = %id, error = %err, "answer rejected");
                    rejected = Some(err);
                }
            },
            Action::Previous => {
                rejected = None;
                session.previous();
            }
            Action::Quit => {
                debug!(question = %id, "user quit");
                return Err(AssessmentError::Cancelled);
            }
        }
    }

    let result = match session.result() {
        Some(result) => result.clone(),
        None => session.calculate(),
    };
    backend
        .present(&result, session.bank())
        .map_err(AssessmentError::backend)?;
    Ok(result)
}
