//! Interview coach — one function per endpoint: build the prompt, call the
//! completion gateway once, shape the text.
//!
//! All LLM calls go through `CompletionGateway`. Errors are never retried.

use tracing::info;

use crate::errors::AppError;
use crate::interview::evaluation::{parse_evaluation, EvaluationResult};
use crate::interview::prompts::{
    build_ask_prompt, build_evaluate_prompt, build_improve_prompt, build_next_prompt,
    build_start_prompt, ASK_SYSTEM,
};
use crate::llm_client::{CompletionGateway, CompletionProfile, CompletionRequest};
use crate::models::persona::PersonaProfile;

pub const ASK_PROFILE: CompletionProfile = CompletionProfile {
    temperature: 0.5,
    max_tokens: 1024,
};

/// Shared by the first and follow-up question calls.
pub const QUESTION_PROFILE: CompletionProfile = CompletionProfile {
    temperature: 0.7,
    max_tokens: 150,
};

pub const EVALUATE_PROFILE: CompletionProfile = CompletionProfile {
    temperature: 0.5,
    max_tokens: 300,
};

pub const IMPROVE_PROFILE: CompletionProfile = CompletionProfile {
    temperature: 0.6,
    max_tokens: 400,
};

/// Answers `question` in the persona's voice.
pub async fn answer_as_persona(
    gateway: &dyn CompletionGateway,
    persona: &PersonaProfile,
    question: &str,
    job_role: &str,
) -> Result<String, AppError> {
    let prompt = build_ask_prompt(persona, question, job_role);
    let answer = gateway
        .complete(CompletionRequest {
            system: Some(ASK_SYSTEM),
            user: &prompt,
            profile: ASK_PROFILE,
        })
        .await?;
    Ok(answer)
}

/// Generates the opening interview question.
pub async fn start_interview(
    gateway: &dyn CompletionGateway,
    job_role: &str,
    experience_level: &str,
) -> Result<String, AppError> {
    info!("Starting {experience_level} interview for {job_role}");
    let prompt = build_start_prompt(job_role, experience_level);
    ask_user_only(gateway, &prompt, QUESTION_PROFILE).await
}

/// Generates question number `question_number`. Prior questions are not consulted.
pub async fn next_question(
    gateway: &dyn CompletionGateway,
    job_role: &str,
    question_number: &str,
    experience_level: &str,
) -> Result<String, AppError> {
    let prompt = build_next_prompt(job_role, question_number, experience_level);
    ask_user_only(gateway, &prompt, QUESTION_PROFILE).await
}

/// Rates a candidate answer. A reply in the wrong format degrades to defaults.
pub async fn evaluate_answer(
    gateway: &dyn CompletionGateway,
    question: &str,
    answer: &str,
    job_role: &str,
    experience_level: &str,
) -> Result<EvaluationResult, AppError> {
    let prompt = build_evaluate_prompt(question, answer, job_role, experience_level);
    let text = ask_user_only(gateway, &prompt, EVALUATE_PROFILE).await?;
    Ok(parse_evaluation(&text))
}

/// Rewrites a candidate answer more professionally.
pub async fn improve_answer(
    gateway: &dyn CompletionGateway,
    question: &str,
    answer: &str,
    job_role: &str,
) -> Result<String, AppError> {
    let prompt = build_improve_prompt(question, answer, job_role);
    ask_user_only(gateway, &prompt, IMPROVE_PROFILE).await
}

async fn ask_user_only(
    gateway: &dyn CompletionGateway,
    prompt: &str,
    profile: CompletionProfile,
) -> Result<String, AppError> {
    let text = gateway
        .complete(CompletionRequest {
            system: None,
            user: prompt,
            profile,
        })
        .await?;
    Ok(text)
}
