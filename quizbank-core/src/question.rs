//! Question records and request payloads

use serde::{Deserialize, Serialize};

use crate::id::DocId;
use crate::validation::ValidationError;

/// A persisted question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: DocId,
    pub question: String,
    /// Ordered answer options as presented to the taker.
    pub options: Vec<String>,
    pub answer: String,
    pub positive_mark: f64,
    pub explanation: String,
}

/// Creation payload. The store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionInput {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub positive_mark: f64,
    #[serde(default)]
    pub explanation: String,
}

impl QuestionInput {
    /// Check completeness: every field must be present and non-empty
    /// (positive mark strictly positive). `index` is the payload's position
    /// in its batch, reported back in the error.
    pub fn validate(&self, index: usize) -> Result<(), ValidationError> {
        let missing = |field| ValidationError::MissingField { index, field };

        if self.question.trim().is_empty() {
            return Err(missing("question"));
        }
        if self.options.is_empty() {
            return Err(missing("options"));
        }
        if self.answer.trim().is_empty() {
            return Err(missing("answer"));
        }
        if self.positive_mark <= 0.0 {
            return Err(missing("positiveMark"));
        }
        if self.explanation.trim().is_empty() {
            return Err(missing("explanation"));
        }
        Ok(())
    }
}

/// Partial update; only the fields present are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuestionPatch {
    pub question: Option<String>,
    pub options: Option<Vec<String>>,
    pub answer: Option<String>,
    pub positive_mark: Option<f64>,
    pub explanation: Option<String>,
}

impl QuestionPatch {
    pub fn is_empty(&self) -> bool {
        self.question.is_none()
            && self.options.is_none()
            && self.answer.is_none()
            && self.positive_mark.is_none()
            && self.explanation.is_none()
    }

    /// Apply this patch to an existing record.
    pub fn apply(&self, question: &mut Question) {
        if let Some(q) = &self.question {
            question.question = q.clone();
        }
        if let Some(o) = &self.options {
            question.options = o.clone();
        }
        if let Some(a) = &self.answer {
            question.answer = a.clone();
        }
        if let Some(m) = self.positive_mark {
            question.positive_mark = m;
        }
        if let Some(e) = &self.explanation {
            question.explanation = e.clone();
        }
    }
}

/// One entry of an update batch: which document, and what to change.
/// Transient request payload, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionUpdate {
    pub id: DocId,
    pub updates: QuestionPatch,
}
