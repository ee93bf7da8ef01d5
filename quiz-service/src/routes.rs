use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::{
    config::AppState,
    db,
    error::Error,
    model::{self, QuizRecord},
    s3,
};

#[derive(Deserialize)]
pub struct QuestionParams {
    email: String,
    id: String,
}

#[derive(Deserialize)]
pub struct AnswerParams {
    email: String,
    id: String,
    ans: String,
}

#[derive(Serialize, Deserialize)]
pub struct AnswerResult {
    pub correct: bool,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/status/ping", get(get_status_ping))
        .route("/question", get(ask_question))
        .route("/ans", get(check_answer).post(check_answer))
        .with_state(state)
}

/// Serves the asset of the first quiz the caller has not seen yet.
pub async fn ask_question(
    State(state): State<AppState>,
    Query(params): Query<QuestionParams>,
) -> Result<impl IntoResponse, Error> {
    verify_user(&state, &params.id, &params.email).await?;

    let quiz = next_quiz(&state, &params.email).await?;
    let bytes = s3::fetch_asset(&state.s3, &state.env_vars.bucket_name, &quiz.question).await?;

    Ok(bytes)
}

/// Checks the submitted answer against the selected quiz record and
/// records the caller as a viewer of that record.
pub async fn check_answer(
    State(state): State<AppState>,
    Query(params): Query<AnswerParams>,
) -> Result<impl IntoResponse, Error> {
    verify_user(&state, &params.id, &params.email).await?;

    let quiz = next_quiz(&state, &params.email).await?;
    let correct = quiz.accepts(&params.ans);

    // The outcome stands even if the viewer write fails.
    if let Err(e) = db::record_viewer(
        &state.dynamodb,
        &state.env_vars.quiz_table_name,
        &quiz.id,
        &params.email,
    )
    .await
    {
        error!(error = %e, quiz = %quiz.id, "unable to record viewer");
    }

    Ok((StatusCode::CREATED, Json(AnswerResult { correct })))
}

pub async fn get_status_ping() -> impl IntoResponse {
    info!("Status");
    StatusCode::OK
}

async fn verify_user(state: &AppState, id: &str, email: &str) -> Result<(), Error> {
    let user = db::find_user(&state.dynamodb, &state.env_vars.user_table_name, id, email).await?;
    if user.is_none() {
        warn!(%id, "user not recognized");
        return Err(Error::UnknownUser);
    }
    Ok(())
}

async fn next_quiz(state: &AppState, email: &str) -> Result<QuizRecord, Error> {
    let candidates =
        db::unseen_quizzes(&state.dynamodb, &state.env_vars.quiz_table_name, email).await?;
    model::select_quiz(candidates).ok_or(Error::NoQuizAvailable)
}
