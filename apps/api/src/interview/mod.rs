// Interview practice: persona answers, question generation, answer evaluation and rewriting.
// All LLM calls go through the CompletionGateway in llm_client.

pub mod coach;
pub mod evaluation;
pub mod handlers;
pub mod prompts;
