//! Question access service
//!
//! The five batch operations over the question collection. Each operation
//! fans its per-item store calls out concurrently and collects results in
//! input order; a lookup miss is a `None` in the matching slot, never an
//! error. Failures travel on a typed error channel only - the success
//! payload is always the declared result shape.
//!
//! Batches are not transactional: a store fault mid-batch can leave a
//! subset of writes applied, matching single-document atomicity at the
//! store and nothing more.

use std::sync::Arc;

use futures::future::try_join_all;

use quizbank_core::{DocId, Question, QuestionInput, QuestionUpdate, Quiz, ValidationError};

use crate::store::{QuestionStore, QuizStore, StoreError};

/// Per-quiz lookup result: `None` when the quiz id resolved to nothing,
/// otherwise one `Question`-or-absent per referenced id, in reference order.
pub type QuizQuestions = Option<Vec<Option<Question>>>;

/// Service error type
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Batch CRUD over questions plus the quiz-to-question traversal.
pub struct QuestionService {
    questions: Arc<dyn QuestionStore>,
    quizzes: Arc<dyn QuizStore>,
}

impl QuestionService {
    pub fn new(questions: Arc<dyn QuestionStore>, quizzes: Arc<dyn QuizStore>) -> Self {
        Self { questions, quizzes }
    }

    /// Look up questions by id, one result slot per requested id.
    ///
    /// An empty id list means "everything": an unbounded scan of the
    /// collection, each record wrapped `Some` to keep the result shape.
    pub async fn list(&self, ids: &[DocId]) -> Result<Vec<Option<Question>>, ServiceError> {
        if ids.is_empty() {
            let all = self.questions.find_all().await?;
            return Ok(all.into_iter().map(Some).collect());
        }

        let found = try_join_all(ids.iter().map(|id| self.questions.find_by_id(*id))).await?;
        Ok(found)
    }

    /// Follow quiz-to-question references: one entry per requested quiz id,
    /// `None` for a quiz that does not exist. Question ids shared between
    /// quizzes are fetched once per reference - no deduplication.
    pub async fn list_by_quiz(
        &self,
        quiz_ids: &[DocId],
    ) -> Result<Vec<QuizQuestions>, ServiceError> {
        if quiz_ids.is_empty() {
            return Err(ValidationError::EmptyBatch {
                operation: "getQuestionsForQuiz",
            }
            .into());
        }

        let quizzes = try_join_all(quiz_ids.iter().map(|id| self.quizzes.find_by_id(*id))).await?;
        let groups =
            try_join_all(quizzes.into_iter().map(|quiz| self.quiz_questions(quiz))).await?;
        Ok(groups)
    }

    async fn quiz_questions(&self, quiz: Option<Quiz>) -> Result<QuizQuestions, StoreError> {
        match quiz {
            Some(quiz) => {
                let found = try_join_all(
                    quiz.questions.iter().map(|id| self.questions.find_by_id(*id)),
                )
                .await?;
                Ok(Some(found))
            }
            None => Ok(None),
        }
    }

    /// Create a batch of questions. The whole batch is validated before any
    /// write, so an incomplete item can never leave a prefix of the batch
    /// persisted. Created records come back in input order with their
    /// store-assigned ids.
    pub async fn create(
        &self,
        inputs: Vec<QuestionInput>,
    ) -> Result<Vec<Question>, ServiceError> {
        if inputs.is_empty() {
            return Err(ValidationError::EmptyBatch {
                operation: "createQuestions",
            }
            .into());
        }

        for (index, input) in inputs.iter().enumerate() {
            input.validate(index)?;
        }

        let created =
            try_join_all(inputs.into_iter().map(|input| self.questions.insert(input))).await?;
        Ok(created)
    }

    /// Apply partial updates by id. Unknown ids yield `None`; concurrent
    /// updates to the same id are unguarded - last write wins at the store.
    pub async fn update(
        &self,
        updates: Vec<QuestionUpdate>,
    ) -> Result<Vec<Option<Question>>, ServiceError> {
        if updates.is_empty() {
            return Err(ValidationError::EmptyBatch {
                operation: "updateQuestions",
            }
            .into());
        }

        let updated = try_join_all(
            updates
                .into_iter()
                .map(|u| self.questions.update_by_id(u.id, u.updates)),
        )
        .await?;
        Ok(updated)
    }

    /// Delete by id, returning each document's prior value or `None` if
    /// nothing matched. No existence precheck, no cascade into quizzes
    /// that reference the deleted questions.
    pub async fn delete(&self, ids: &[DocId]) -> Result<Vec<Option<Question>>, ServiceError> {
        if ids.is_empty() {
            return Err(ValidationError::EmptyBatch {
                operation: "deleteQuestions",
            }
            .into());
        }

        let deleted =
            try_join_all(ids.iter().map(|id| self.questions.delete_by_id(*id))).await?;
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::{MemoryQuestionStore, MemoryQuizStore};
    use quizbank_core::QuestionPatch;

    fn service() -> (Arc<MemoryQuestionStore>, Arc<MemoryQuizStore>, QuestionService) {
        let questions = Arc::new(MemoryQuestionStore::new());
        let quizzes = Arc::new(MemoryQuizStore::new());
        let service = QuestionService::new(
            Arc::clone(&questions) as Arc<dyn QuestionStore>,
            Arc::clone(&quizzes) as Arc<dyn QuizStore>,
        );
        (questions, quizzes, service)
    }

    fn input(text: &str) -> QuestionInput {
        QuestionInput {
            question: text.to_string(),
            options: vec!["3".to_string(), "4".to_string()],
            answer: "4".to_string(),
            positive_mark: 1.0,
            explanation: "basic math".to_string(),
        }
    }

    #[tokio::test]
    async fn list_preserves_input_order_with_absent_slots() {
        let (questions, _, service) = service();
        let first = questions.seed(input("first")).await;
        let second = questions.seed(input("second")).await;
        let missing = DocId::new();

        let result = service.list(&[second, missing, first]).await.unwrap();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].as_ref().unwrap().question, "second");
        assert!(result[1].is_none());
        assert_eq!(result[2].as_ref().unwrap().question, "first");
    }

    #[tokio::test]
    async fn list_with_no_ids_scans_whole_collection() {
        let (questions, _, service) = service();
        questions.seed(input("a")).await;
        questions.seed(input("b")).await;
        questions.seed(input("c")).await;

        let result = service.list(&[]).await.unwrap();

        assert_eq!(result.len(), 3);
        assert!(result.iter().all(Option::is_some));
    }

    #[tokio::test]
    async fn quiz_traversal_groups_per_quiz_without_dedup() {
        let (questions, quizzes, service) = service();
        let q1 = questions.seed(input("q1")).await;
        let q2 = questions.seed(input("q2")).await;
        let q3 = questions.seed(input("q3")).await;
        let quiz_a = quizzes.seed(vec![q1, q2]).await;
        let quiz_b = quizzes.seed(vec![q2, q3]).await;

        let groups = service.list_by_quiz(&[quiz_a, quiz_b]).await.unwrap();

        assert_eq!(groups.len(), 2);
        let a: Vec<_> = groups[0].as_ref().unwrap().iter().map(|q| q.as_ref().unwrap().id).collect();
        let b: Vec<_> = groups[1].as_ref().unwrap().iter().map(|q| q.as_ref().unwrap().id).collect();
        assert_eq!(a, vec![q1, q2]);
        assert_eq!(b, vec![q2, q3]);

        // q2 appears in both quizzes and is fetched once per reference.
        assert_eq!(questions.lookup_count(), 4);
    }

    #[tokio::test]
    async fn quiz_traversal_yields_none_for_unknown_quiz() {
        let (questions, quizzes, service) = service();
        let q1 = questions.seed(input("q1")).await;
        let quiz = quizzes.seed(vec![q1]).await;

        let groups = service.list_by_quiz(&[DocId::new(), quiz]).await.unwrap();

        assert!(groups[0].is_none());
        assert_eq!(groups[1].as_ref().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn quiz_traversal_rejects_empty_batch() {
        let (_, _, service) = service();
        let err = service.list_by_quiz(&[]).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Validation(ValidationError::EmptyBatch { .. })
        ));
    }

    #[tokio::test]
    async fn create_returns_store_assigned_ids() {
        let (_, _, service) = service();
        let created = service.create(vec![input("2+2?")]).await.unwrap();

        assert_eq!(created.len(), 1);
        assert_eq!(created[0].question, "2+2?");

        // The record is readable back under its assigned id.
        let found = service.list(&[created[0].id]).await.unwrap();
        assert_eq!(found[0].as_ref(), Some(&created[0]));
    }

    #[tokio::test]
    async fn create_rejects_empty_batch() {
        let (_, _, service) = service();
        let err = service.create(vec![]).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Validation(ValidationError::EmptyBatch { .. })
        ));
    }

    #[tokio::test]
    async fn create_rejects_incomplete_item_and_persists_nothing() {
        let (questions, _, service) = service();
        let incomplete = QuestionInput {
            explanation: String::new(),
            ..input("valid otherwise")
        };

        let err = service.create(vec![input("fine"), incomplete]).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Validation(ValidationError::MissingField { index: 1, .. })
        ));

        // Validation runs before any write, so the valid item is not left behind.
        assert!(questions.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_rejects_empty_batch() {
        let (_, _, service) = service();
        assert!(matches!(
            service.update(vec![]).await.unwrap_err(),
            ServiceError::Validation(ValidationError::EmptyBatch { .. })
        ));
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_absent_not_error() {
        let (_, _, service) = service();
        let result = service
            .update(vec![QuestionUpdate {
                id: DocId::new(),
                updates: QuestionPatch {
                    positive_mark: Some(2.0),
                    ..QuestionPatch::default()
                },
            }])
            .await
            .unwrap();
        assert_eq!(result, vec![None]);
    }

    #[tokio::test]
    async fn update_returns_post_update_document() {
        let (questions, _, service) = service();
        let id = questions.seed(input("2+2?")).await;

        let result = service
            .update(vec![QuestionUpdate {
                id,
                updates: QuestionPatch {
                    positive_mark: Some(2.0),
                    ..QuestionPatch::default()
                },
            }])
            .await
            .unwrap();

        let updated = result[0].as_ref().unwrap();
        assert_eq!(updated.positive_mark, 2.0);
        assert_eq!(updated.question, "2+2?");
    }

    #[tokio::test]
    async fn delete_rejects_empty_batch() {
        let (_, _, service) = service();
        assert!(matches!(
            service.delete(&[]).await.unwrap_err(),
            ServiceError::Validation(ValidationError::EmptyBatch { .. })
        ));
    }

    #[tokio::test]
    async fn delete_returns_prior_document_or_absent() {
        let (questions, _, service) = service();
        let existing = questions.seed(input("kept until now")).await;
        let missing = DocId::new();

        let result = service.delete(&[existing, missing]).await.unwrap();

        assert_eq!(result[0].as_ref().unwrap().id, existing);
        assert!(result[1].is_none());

        // Gone after the delete.
        let after = service.list(&[existing]).await.unwrap();
        assert_eq!(after, vec![None]);
    }
}
