//! Application state shared across handlers

use std::sync::Arc;

use crate::service::QuestionService;
use crate::store::{QuestionStore, QuizStore};

/// Shared application state: injected store handles.
///
/// Handlers build a `QuestionService` per request from these, the same way
/// a repository would be built around a pooled connection.
#[derive(Clone)]
pub struct AppState {
    questions: Arc<dyn QuestionStore>,
    quizzes: Arc<dyn QuizStore>,
}

impl AppState {
    pub fn new(questions: Arc<dyn QuestionStore>, quizzes: Arc<dyn QuizStore>) -> Self {
        Self { questions, quizzes }
    }

    pub fn service(&self) -> QuestionService {
        QuestionService::new(Arc::clone(&self.questions), Arc::clone(&self.quizzes))
    }
}
