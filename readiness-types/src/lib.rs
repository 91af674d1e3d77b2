//! Core types for the readiness crate.
//!
//! This crate provides the foundational types for a career readiness assessment:
//! - `QuestionBank` and `SectionInfo` - The static, ordered question content
//! - `Question` and `AnswerKind` - Individual questions and their answer types
//! - `Responses` and `QuestionId` - Collected answers keyed by question
//! - `Section`, `Category`, `Dimension` - The fixed assessment structure
//! - `AssessmentResult` - The derived score summary
//! - `AssessmentBackend` - The seam for presentation layers

mod question_id;
pub use question_id::QuestionId;

mod response_value;
pub use response_value::ResponseValue;

mod responses;
pub use responses::{Response, ResponseError, Responses};

mod section;
pub use section::{Category, Dimension, Section};

mod question;
pub use question::{AnswerKind, Question, ScaleDescriptor};

mod question_bank;
pub use question_bank::{QuestionBank, SectionInfo};

mod result;
pub use result::{AssessmentResult, Recommendation, WiscarScores};

mod error;
pub use error::{AssessmentError, DefinitionError, ValidationError};

mod traits;
pub use traits::{Action, AssessmentBackend, Prompt};
