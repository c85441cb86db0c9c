//! Quiz records
//!
//! A quiz holds question references, not the questions themselves; the two
//! collections have independent lifecycles and deleting a quiz never
//! cascades into its questions.

use serde::{Deserialize, Serialize};

use crate::id::DocId;

/// A persisted quiz: an ordered list of question references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    pub id: DocId,
    pub questions: Vec<DocId>,
}
