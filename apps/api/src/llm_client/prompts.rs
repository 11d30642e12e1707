// Shared prompt fragments.
// Operation-specific templates live in interview/prompts.rs.

/// Suffix appended to every question-generation prompt.
pub const QUESTION_ONLY_SUFFIX: &str = " Only return the question, nothing else.";
