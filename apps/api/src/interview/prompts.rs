// All LLM prompt templates for the interview endpoints.
// Placeholders are `{name}` tokens filled by `fill_template` in a single pass,
// so substituted text is never re-scanned for placeholders.

use serde_json::Value;

use crate::llm_client::prompts::QUESTION_ONLY_SUFFIX;
use crate::models::persona::PersonaProfile;

/// Name used in the persona prompt when the document does not carry one.
pub const FALLBACK_NAME: &str = "a professional";

/// The experience level that selects the entry-level wording. Anything else is "experienced".
pub const FRESHER: &str = "Fresher";

pub fn is_fresher(experience_level: &str) -> bool {
    experience_level == FRESHER
}

/// System message for answering on the persona's behalf.
pub const ASK_SYSTEM: &str = "You are a helpful AI assistant that answers interview questions \
    on behalf of a job candidate. Always be positive, enthusiastic, and focused on getting the job. \
    For yes/no questions, start with a clear 'Yes' or 'No'. Always show willingness to learn and adapt. \
    Adjust answer length based on the question - be brief for simple questions, detailed for complex ones.";

/// Persona answer prompt.
/// Replace: {name}, {role_context}, {role_tailoring}, {background}, {skills},
///          {experience}, {education}, {projects}, {question}
pub const ASK_PROMPT_TEMPLATE: &str = r#"You are {name}, a motivated fresher looking to start your career as a Full Stack Web Developer. 
{role_context}Answer the following interview question as if you are this person, based on their background and experience.

IMPORTANT INSTRUCTIONS:
- Be enthusiastic, positive, and eager to get the job
- For yes/no questions, answer directly with "Yes" or "No" followed by a brief positive statement
- For open-ended questions like "Tell me about yourself", provide detailed, comprehensive answers
- If asked about unknown technologies/skills, say you're eager to learn them quickly
- Show confidence in your existing skills while being open to learning new ones
- For questions about work conditions (night shifts, relocation, etc.), always be positive and agreeable
- Focus on getting hired - emphasize your adaptability and learning ability
{role_tailoring}

Background: {background}
Skills: {skills}
Experience: {experience}
Education: {education}
Projects: {projects}
Key Strengths: Quick learner, adaptable, passionate about web development

Question: {question}

Answer positively and appropriately (brief for simple questions, detailed for complex ones):"#;

pub const START_FRESHER_TEMPLATE: &str = "Generate an entry-level interview question suitable for \
    fresh graduates or candidates with 0-2 years of experience applying for a {job_role} position. \
    Focus on fundamental concepts and basic skills.";

pub const START_EXPERIENCED_TEMPLATE: &str = "Generate an experienced-level interview question \
    suitable for candidates with 3+ years of experience applying for a {job_role} position. \
    Focus on advanced concepts, system design, or complex problem-solving.";

pub const NEXT_FRESHER_TEMPLATE: &str = "Generate entry-level interview question #{question_number} \
    for a {job_role} position. Focus on fundamentals and basic concepts suitable for fresh graduates.";

pub const NEXT_EXPERIENCED_TEMPLATE: &str = "Generate experienced-level interview question \
    #{question_number} for a {job_role} position. Focus on advanced topics, system design, or \
    real-world scenarios suitable for experienced professionals.";

const FRESHER_CRITERIA: &str = "Evaluate considering this is a fresher/entry-level candidate. \
    Focus on fundamental understanding, clarity of explanation, and willingness to learn. \
    Be encouraging and constructive.";

const EXPERIENCED_CRITERIA: &str = "Evaluate considering this is an experienced-level candidate. \
    Expect detailed technical knowledge, real-world examples, best practices, and demonstration \
    of expertise. Be more critical and thorough.";

/// Answer evaluation prompt. The output format block is what `parse_evaluation` reads.
/// Replace: {job_role}, {experience_level}, {criteria}, {question}, {answer}
pub const EVALUATE_PROMPT_TEMPLATE: &str = r#"You are an expert interviewer for a {job_role} position at {experience_level} level.

{criteria}

Interview Question: {question}

Candidate's Answer: {answer}

Evaluate this answer on the following criteria:
1. Content relevance and accuracy
2. Communication clarity
3. Grammar and language quality

Provide:
- A rating from 1-5 (5 being excellent)
- Constructive feedback (2-3 sentences)
- List any major grammar/language issues (if any)

Format your response EXACTLY as:
RATING: [number]
FEEDBACK: [your feedback]
GRAMMAR: [comma-separated issues, or "None"]"#;

/// Replace: {job_role}, {question}, {answer}
pub const IMPROVE_PROMPT_TEMPLATE: &str = r#"You are an expert career coach for {job_role} positions.

Interview Question: {question}

Candidate's Original Answer: {answer}

Rewrite this answer to be more professional, articulate, and impressive while maintaining the candidate's key points. Make it concise, confident, and interview-ready.

Only return the improved answer, nothing else."#;

/// Builds the user message for answering `question` as the persona.
/// An empty `job_role` drops both role-specific lines.
pub fn build_ask_prompt(persona: &PersonaProfile, question: &str, job_role: &str) -> String {
    let (role_context, role_tailoring) = if job_role.is_empty() {
        (String::new(), String::new())
    } else {
        (
            format!("You are applying for a {job_role} position. "),
            format!("- Tailor your answer to highlight skills and experience relevant to {job_role}"),
        )
    };

    let name = persona.name.as_deref().unwrap_or(FALLBACK_NAME);
    let background = persona.background.as_deref().unwrap_or_default();
    let skills = persona.skills.flatten();
    let experience = pretty_json(&persona.experience);
    let education = pretty_json(&persona.education);
    let projects = pretty_json(&persona.projects);

    fill_template(
        ASK_PROMPT_TEMPLATE,
        &[
            ("name", name),
            ("role_context", role_context.as_str()),
            ("role_tailoring", role_tailoring.as_str()),
            ("background", background),
            ("skills", skills.as_str()),
            ("experience", experience.as_str()),
            ("education", education.as_str()),
            ("projects", projects.as_str()),
            ("question", question),
        ],
    )
}

/// Builds the single-message prompt for the first interview question.
pub fn build_start_prompt(job_role: &str, experience_level: &str) -> String {
    let template = if is_fresher(experience_level) {
        START_FRESHER_TEMPLATE
    } else {
        START_EXPERIENCED_TEMPLATE
    };
    let mut prompt = fill_template(template, &[("job_role", job_role)]);
    prompt.push_str(QUESTION_ONLY_SUFFIX);
    prompt
}

/// Builds the prompt for a follow-up question. `question_number` is only
/// echoed into the wording; earlier questions are not tracked.
pub fn build_next_prompt(job_role: &str, question_number: &str, experience_level: &str) -> String {
    let template = if is_fresher(experience_level) {
        NEXT_FRESHER_TEMPLATE
    } else {
        NEXT_EXPERIENCED_TEMPLATE
    };
    let mut prompt = fill_template(
        template,
        &[("job_role", job_role), ("question_number", question_number)],
    );
    prompt.push_str(QUESTION_ONLY_SUFFIX);
    prompt
}

pub fn build_evaluate_prompt(
    question: &str,
    answer: &str,
    job_role: &str,
    experience_level: &str,
) -> String {
    let criteria = if is_fresher(experience_level) {
        FRESHER_CRITERIA
    } else {
        EXPERIENCED_CRITERIA
    };
    fill_template(
        EVALUATE_PROMPT_TEMPLATE,
        &[
            ("job_role", job_role),
            ("experience_level", experience_level),
            ("criteria", criteria),
            ("question", question),
            ("answer", answer),
        ],
    )
}

pub fn build_improve_prompt(question: &str, answer: &str, job_role: &str) -> String {
    fill_template(
        IMPROVE_PROMPT_TEMPLATE,
        &[("job_role", job_role), ("question", question), ("answer", answer)],
    )
}

/// Substitutes `{key}` tokens in one left-to-right pass.
/// Unknown tokens and unmatched braces are copied through unchanged.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replacement = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, close))
        });
        match replacement {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Two-space indented JSON, matching how the records read in the source document.
fn pretty_json(records: &Value) -> String {
    serde_json::to_string_pretty(records).unwrap_or_else(|_| "[]".to_string())
}
