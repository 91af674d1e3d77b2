//! # readiness
//!
//! A career readiness self-assessment. Backend-agnostic.
//!
//! The assessment walks through three sections of questions (personality and
//! motivation, technical knowledge, and the six WISCAR readiness dimensions),
//! collects one answer per question and scores the answers into a
//! recommendation.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use readiness::{Session, bank, run};
//!
//! let mut session = Session::new(bank::stakeholder_coaching());
//! let result = run(&mut session, &mut backend)?;
//! println!("{}", result.recommendation);
//! ```
//!
//! Sessions can also be driven by hand:
//!
//! ```rust
//! use readiness::{Section, Session, bank};
//!
//! let mut session = Session::new(bank::stakeholder_coaching());
//! session.start();
//! session.record("psych_01", 4).unwrap();
//! session.next();
//! assert_eq!(session.section(), Section::Psychometric);
//! assert_eq!(session.navigation().index(), 1);
//! ```
//!
//! ## Scoring
//!
//! Psychometric and technical scores are the mean scale answer of their
//! section times 20. The six WISCAR dimensions report fixed baseline values
//! unless [`WiscarScoring::Derived`] is configured. See [`score`].
//!
//! ## Backends
//!
//! Backends implement `AssessmentBackend`:
//! - `readiness-dialoguer-wizard` - CLI prompts via dialoguer
//! - [`ScriptedBackend`] - pre-defined answers for tests

// Re-export all types from readiness-types
pub use readiness_types::*;

pub mod bank;

mod config;
pub use config::{ChoiceScoring, ScoringConfig, WiscarScoring};

mod navigation;
pub use navigation::{Navigation, SectionProgress, Transition};

mod scoring;
pub use scoring::{confidence, prefix_score, recommend, score, wiscar_scores};

mod session;
pub use session::Session;

mod runner;
pub use runner::run;

// Scripted backend for running assessments without user interaction
mod test_backend;
pub use test_backend::{ScriptedBackend, ScriptedBackendError};
