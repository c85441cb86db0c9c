//! In-memory stores for tests
//!
//! Same contract as the Mongo stores, backed by a mutex-guarded map.
//! `MemoryQuestionStore` counts `find_by_id` calls so tests can observe
//! fan-out behavior (e.g. that shared references are fetched per quiz).

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use quizbank_core::{DocId, Question, QuestionInput, QuestionPatch, Quiz};

use super::{QuestionStore, QuizStore, StoreError};

#[derive(Default)]
pub struct MemoryQuestionStore {
    questions: Mutex<BTreeMap<DocId, Question>>,
    lookups: AtomicUsize,
}

impl MemoryQuestionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a question directly, bypassing validation.
    pub async fn seed(&self, input: QuestionInput) -> DocId {
        let id = DocId::new();
        let question = Question {
            id,
            question: input.question,
            options: input.options,
            answer: input.answer,
            positive_mark: input.positive_mark,
            explanation: input.explanation,
        };
        self.questions.lock().await.insert(id, question);
        id
    }

    /// Number of `find_by_id` calls issued so far.
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QuestionStore for MemoryQuestionStore {
    async fn find_all(&self) -> Result<Vec<Question>, StoreError> {
        Ok(self.questions.lock().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: DocId) -> Result<Option<Question>, StoreError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.questions.lock().await.get(&id).cloned())
    }

    async fn insert(&self, input: QuestionInput) -> Result<Question, StoreError> {
        let id = DocId::new();
        let question = Question {
            id,
            question: input.question,
            options: input.options,
            answer: input.answer,
            positive_mark: input.positive_mark,
            explanation: input.explanation,
        };
        self.questions.lock().await.insert(id, question.clone());
        Ok(question)
    }

    async fn update_by_id(
        &self,
        id: DocId,
        patch: QuestionPatch,
    ) -> Result<Option<Question>, StoreError> {
        let mut questions = self.questions.lock().await;
        Ok(questions.get_mut(&id).map(|question| {
            patch.apply(question);
            question.clone()
        }))
    }

    async fn delete_by_id(&self, id: DocId) -> Result<Option<Question>, StoreError> {
        Ok(self.questions.lock().await.remove(&id))
    }
}

#[derive(Default)]
pub struct MemoryQuizStore {
    quizzes: Mutex<BTreeMap<DocId, Quiz>>,
}

impl MemoryQuizStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a quiz referencing the given question ids.
    pub async fn seed(&self, questions: Vec<DocId>) -> DocId {
        let id = DocId::new();
        self.quizzes.lock().await.insert(id, Quiz { id, questions });
        id
    }
}

#[async_trait]
impl QuizStore for MemoryQuizStore {
    async fn find_by_id(&self, id: DocId) -> Result<Option<Quiz>, StoreError> {
        Ok(self.quizzes.lock().await.get(&id).cloned())
    }
}
