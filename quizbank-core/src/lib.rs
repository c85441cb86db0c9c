//! quizbank-core: domain types for the question access service
//!
//! Questions and quizzes are plain serde-serializable records; all user
//! input is validated at the boundary and invalid input returns a
//! `ValidationError`, never a panic.

pub mod id;
pub mod question;
pub mod quiz;
pub mod validation;

pub use id::DocId;
pub use question::{Question, QuestionInput, QuestionPatch, QuestionUpdate};
pub use quiz::Quiz;
pub use validation::ValidationError;
