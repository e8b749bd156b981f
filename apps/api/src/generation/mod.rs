// Question Generation Engine
// Implements: prompt construction, model call, reply parsing, sanitization,
// interview persistence. All LLM calls go through llm_client; no direct
// OpenAI calls here.

pub mod handlers;
pub mod prompts;
pub mod question_gen;
