//! Axum route handlers for the interview API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::interview::coach;
use crate::interview::evaluation::EvaluationResult;
use crate::interview::prompts::FRESHER;
use crate::models::persona::{value_to_text, PersonaProfile};
use crate::state::AppState;

const DEFAULT_JOB_ROLE: &str = "Software Developer";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────
//
// Every field is optional; absent or null values take the defaults below.

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AskRequest {
    pub question: Option<String>,
    /// No default: an absent role leaves the prompt role-neutral.
    pub job_role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartInterviewRequest {
    pub job_role: Option<String>,
    pub experience_level: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextQuestionRequest {
    pub job_role: Option<String>,
    /// Any JSON scalar; rendered verbatim into the prompt. Defaults to 1.
    pub question_number: Option<Value>,
    pub experience_level: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    pub question: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateAnswerRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub job_role: Option<String>,
    pub experience_level: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImproveAnswerRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub job_role: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImproveAnswerResponse {
    pub improved_answer: String,
}

fn job_role_or_default(job_role: Option<String>) -> String {
    job_role.unwrap_or_else(|| DEFAULT_JOB_ROLE.to_string())
}

fn level_or_default(experience_level: Option<String>) -> String {
    experience_level.unwrap_or_else(|| FRESHER.to_string())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/ask
///
/// Answers an interview question in the persona's voice.
pub async fn handle_ask(
    State(state): State<AppState>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<AskResponse>, AppError> {
    let Json(request) = payload?;
    let question = request.question.unwrap_or_default();
    if question.trim().is_empty() {
        return Err(AppError::Validation("Question is required".to_string()));
    }
    let job_role = request.job_role.unwrap_or_default();

    let persona = state.persona.load().await;
    let answer =
        coach::answer_as_persona(state.llm.as_ref(), &persona, &question, &job_role).await?;

    Ok(Json(AskResponse { question, answer }))
}

/// GET /api/persona
///
/// Returns the persona document, or the placeholder when none is available.
pub async fn handle_get_persona(State(state): State<AppState>) -> Json<PersonaProfile> {
    Json(state.persona.load().await)
}

/// POST /api/start-interview
pub async fn handle_start_interview(
    State(state): State<AppState>,
    payload: Result<Json<StartInterviewRequest>, JsonRejection>,
) -> Result<Json<QuestionResponse>, AppError> {
    let Json(request) = payload?;
    let job_role = job_role_or_default(request.job_role);
    let experience_level = level_or_default(request.experience_level);

    let question =
        coach::start_interview(state.llm.as_ref(), &job_role, &experience_level).await?;

    Ok(Json(QuestionResponse { question }))
}

/// POST /api/evaluate-answer
///
/// Rates the answer 1–5 with feedback and grammar notes.
pub async fn handle_evaluate_answer(
    State(state): State<AppState>,
    payload: Result<Json<EvaluateAnswerRequest>, JsonRejection>,
) -> Result<Json<EvaluationResult>, AppError> {
    let Json(request) = payload?;
    let question = request.question.unwrap_or_default();
    let answer = request.answer.unwrap_or_default();
    let job_role = job_role_or_default(request.job_role);
    let experience_level = level_or_default(request.experience_level);

    let result = coach::evaluate_answer(
        state.llm.as_ref(),
        &question,
        &answer,
        &job_role,
        &experience_level,
    )
    .await?;

    Ok(Json(result))
}

/// POST /api/next-question
pub async fn handle_next_question(
    State(state): State<AppState>,
    payload: Result<Json<NextQuestionRequest>, JsonRejection>,
) -> Result<Json<QuestionResponse>, AppError> {
    let Json(request) = payload?;
    let job_role = job_role_or_default(request.job_role);
    let question_number = request
        .question_number
        .map(|n| value_to_text(&n))
        .unwrap_or_else(|| "1".to_string());
    let experience_level = level_or_default(request.experience_level);

    let question = coach::next_question(
        state.llm.as_ref(),
        &job_role,
        &question_number,
        &experience_level,
    )
    .await?;

    Ok(Json(QuestionResponse { question }))
}

/// POST /api/improve-answer
pub async fn handle_improve_answer(
    State(state): State<AppState>,
    payload: Result<Json<ImproveAnswerRequest>, JsonRejection>,
) -> Result<Json<ImproveAnswerResponse>, AppError> {
    let Json(request) = payload?;
    let question = request.question.unwrap_or_default();
    let answer = request.answer.unwrap_or_default();
    let job_role = job_role_or_default(request.job_role);

    let improved_answer =
        coach::improve_answer(state.llm.as_ref(), &question, &answer, &job_role).await?;

    Ok(Json(ImproveAnswerResponse { improved_answer }))
}
