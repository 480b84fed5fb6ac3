//! Generator prompt for grounded coaching answers

use crate::domain::llm::LlmRequest;

pub const COACH_SYSTEM_PROMPT: &str = "You are an expert mountaineering coach providing detailed, safety-focused advice based on the provided knowledge base.";

/// Build the user prompt around the assembled context and the question
pub fn build_coaching_prompt(context: &str, question: &str) -> String {
    format!(
        "Based on the following mountaineering knowledge base, provide a comprehensive and helpful answer to the user's question.\n\
\n\
KNOWLEDGE BASE CONTEXT:\n\
{context}\n\
USER QUESTION: {question}\n\
\n\
INSTRUCTIONS:\n\
- Directly address the question asked\n\
- Provide specific techniques, procedures, or recommendations\n\
- Include relevant safety considerations\n\
- Give practical next steps the climber can act on\n\
- Reference the knowledge base context where it supports the answer\n\
\n\
ANSWER:"
    )
}

/// Assemble the system and user messages for a coaching answer
pub fn coaching_request(context: &str, question: &str, temperature: f32, max_tokens: u32) -> LlmRequest {
    LlmRequest::builder()
        .system(COACH_SYSTEM_PROMPT)
        .user(build_coaching_prompt(context, question))
        .temperature(temperature)
        .max_tokens(max_tokens)
        .build()
}
