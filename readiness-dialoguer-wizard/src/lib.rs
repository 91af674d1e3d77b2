//! # readiness-dialoguer-wizard
//!
//! Dialoguer wizard backend for readiness.
//!
//! This crate runs the career readiness assessment as a command-line wizard
//! using the `dialoguer` library. Questions are presented one at a time, each
//! as a selection list, and the results page is printed as plain text.
//!
//! ## Example
//!
//! ```rust,ignore
//! use readiness::{Session, bank, run};
//! use readiness_dialoguer_wizard::DialoguerBackend;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut session = Session::new(bank::stakeholder_coaching());
//!     let mut backend = DialoguerBackend::new();
//!     let result = run(&mut session, &mut backend)?;
//!     println!("Overall: {:.0}%", result.overall_score);
//!     Ok(())
//! }
//! ```

mod backend;
pub mod report;

pub use backend::{DialoguerBackend, DialoguerError};
