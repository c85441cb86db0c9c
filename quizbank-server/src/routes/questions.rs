//! Question endpoints
//!
//! Every operation is a batch: reads take ids in the query string, writes
//! take a JSON array body. Result arrays are aligned with the request -
//! `null` marks a document that was asked for but not found.
//!
//! No authentication or authorization is enforced at this layer; the
//! original deferred permission checks to a request-context mechanism that
//! does not exist here.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use quizbank_core::{DocId, Question, QuestionInput, QuestionUpdate, ValidationError};

use crate::error::ApiError;
use crate::service::QuizQuestions;
use crate::state::AppState;

/// Comma-separated id list, e.g. `?ids=65a1...,65a2...`
#[derive(Debug, Deserialize)]
pub struct IdsQuery {
    pub ids: Option<String>,
}

/// Parse a comma-separated id list; absent or blank means empty.
fn parse_ids(raw: Option<&str>) -> Result<Vec<DocId>, ValidationError> {
    raw.unwrap_or("")
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<DocId>())
        .collect()
}

/// GET /questions?ids=a,b - look up questions by id; no ids means all
async fn list_questions(
    State(state): State<AppState>,
    Query(params): Query<IdsQuery>,
) -> Result<Json<Vec<Option<Question>>>, ApiError> {
    let ids = parse_ids(params.ids.as_deref())?;
    let found = state.service().list(&ids).await?;
    Ok(Json(found))
}

/// GET /questions/by-quiz?ids=a,b - questions grouped per requested quiz
async fn questions_by_quiz(
    State(state): State<AppState>,
    Query(params): Query<IdsQuery>,
) -> Result<Json<Vec<QuizQuestions>>, ApiError> {
    let ids = parse_ids(params.ids.as_deref())?;
    let groups = state.service().list_by_quiz(&ids).await?;
    Ok(Json(groups))
}

/// POST /questions - create a batch of questions
async fn create_questions(
    State(state): State<AppState>,
    Json(inputs): Json<Vec<QuestionInput>>,
) -> Result<(StatusCode, Json<Vec<Question>>), ApiError> {
    let created = state.service().create(inputs).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PATCH /questions - apply partial updates by id
async fn update_questions(
    State(state): State<AppState>,
    Json(updates): Json<Vec<QuestionUpdate>>,
) -> Result<Json<Vec<Option<Question>>>, ApiError> {
    let updated = state.service().update(updates).await?;
    Ok(Json(updated))
}

/// DELETE /questions - delete by id, returning each prior document
async fn delete_questions(
    State(state): State<AppState>,
    Json(ids): Json<Vec<DocId>>,
) -> Result<Json<Vec<Option<Question>>>, ApiError> {
    let deleted = state.service().delete(&ids).await?;
    Ok(Json(deleted))
}

/// Question routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/questions",
            get(list_questions)
                .post(create_questions)
                .patch(update_questions)
                .delete(delete_questions),
        )
        .route("/questions/by-quiz", get(questions_by_quiz))
}
