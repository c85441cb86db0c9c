//! MongoDB-backed stores
//!
//! One collection per collaborator: `questions` and `quizzes`. Documents
//! keep the camelCase field names of the original collections, so this
//! server can point at existing data. Identifiers are assigned here on
//! insert; single-document operations are atomic at the store, batches
//! are not.

use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use futures::TryStreamExt;
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection, Database};
use serde::{Deserialize, Serialize};

use quizbank_core::{DocId, Question, QuestionInput, QuestionPatch, Quiz};

use super::{QuestionStore, QuizStore, StoreError};

const QUESTIONS_COLLECTION: &str = "questions";
const QUIZZES_COLLECTION: &str = "quizzes";

/// Connect to the database and hand back both store handles.
pub async fn connect(
    uri: &str,
    database: &str,
) -> Result<(MongoQuestionStore, MongoQuizStore), StoreError> {
    let client = Client::with_uri_str(uri).await?;
    let db = client.database(database);
    Ok((MongoQuestionStore::new(&db), MongoQuizStore::new(&db)))
}

/// Question document as stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct QuestionDoc {
    #[serde(rename = "_id")]
    id: ObjectId,
    question: String,
    options: Vec<String>,
    answer: String,
    #[serde(rename = "positiveMark")]
    positive_mark: f64,
    explanation: String,
}

impl QuestionDoc {
    fn new(id: ObjectId, input: QuestionInput) -> Self {
        Self {
            id,
            question: input.question,
            options: input.options,
            answer: input.answer,
            positive_mark: input.positive_mark,
            explanation: input.explanation,
        }
    }
}

impl From<QuestionDoc> for Question {
    fn from(doc: QuestionDoc) -> Self {
        Self {
            id: doc.id.into(),
            question: doc.question,
            options: doc.options,
            answer: doc.answer,
            positive_mark: doc.positive_mark,
            explanation: doc.explanation,
        }
    }
}

/// Quiz document as stored: ordered question references.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct QuizDoc {
    #[serde(rename = "_id")]
    id: ObjectId,
    questions: Vec<ObjectId>,
}

impl From<QuizDoc> for Quiz {
    fn from(doc: QuizDoc) -> Self {
        Self {
            id: doc.id.into(),
            questions: doc.questions.into_iter().map(DocId::from).collect(),
        }
    }
}

/// Mongo-backed question store.
pub struct MongoQuestionStore {
    collection: Collection<QuestionDoc>,
}

impl MongoQuestionStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(QUESTIONS_COLLECTION),
        }
    }
}

/// Build the `$set` document for a partial update.
fn set_document(patch: &QuestionPatch) -> Document {
    let mut set = Document::new();
    if let Some(q) = &patch.question {
        set.insert("question", q.clone());
    }
    if let Some(o) = &patch.options {
        set.insert("options", o.clone());
    }
    if let Some(a) = &patch.answer {
        set.insert("answer", a.clone());
    }
    if let Some(m) = patch.positive_mark {
        set.insert("positiveMark", m);
    }
    if let Some(e) = &patch.explanation {
        set.insert("explanation", e.clone());
    }
    set
}

#[async_trait]
impl QuestionStore for MongoQuestionStore {
    async fn find_all(&self) -> Result<Vec<Question>, StoreError> {
        let cursor = self.collection.find(doc! {}).await?;
        let docs: Vec<QuestionDoc> = cursor.try_collect().await?;
        Ok(docs.into_iter().map(Question::from).collect())
    }

    async fn find_by_id(&self, id: DocId) -> Result<Option<Question>, StoreError> {
        let found = self
            .collection
            .find_one(doc! { "_id": id.as_object_id() })
            .await?;
        Ok(found.map(Question::from))
    }

    async fn insert(&self, input: QuestionInput) -> Result<Question, StoreError> {
        let doc = QuestionDoc::new(ObjectId::new(), input);
        self.collection.insert_one(&doc).await?;
        Ok(doc.into())
    }

    async fn update_by_id(
        &self,
        id: DocId,
        patch: QuestionPatch,
    ) -> Result<Option<Question>, StoreError> {
        let set = set_document(&patch);
        if set.is_empty() {
            // An empty patch is a read; Mongo rejects an empty $set.
            return self.find_by_id(id).await;
        }

        let updated = self
            .collection
            .find_one_and_update(doc! { "_id": id.as_object_id() }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await?;
        Ok(updated.map(Question::from))
    }

    async fn delete_by_id(&self, id: DocId) -> Result<Option<Question>, StoreError> {
        let deleted = self
            .collection
            .find_one_and_delete(doc! { "_id": id.as_object_id() })
            .await?;
        Ok(deleted.map(Question::from))
    }
}

/// Mongo-backed quiz store.
pub struct MongoQuizStore {
    collection: Collection<QuizDoc>,
}

impl MongoQuizStore {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(QUIZZES_COLLECTION),
        }
    }
}

#[async_trait]
impl QuizStore for MongoQuizStore {
    async fn find_by_id(&self, id: DocId) -> Result<Option<Quiz>, StoreError> {
        let found = self
            .collection
            .find_one(doc! { "_id": id.as_object_id() })
            .await?;
        Ok(found.map(Quiz::from))
    }
}
