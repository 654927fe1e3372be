use crate::models::{ChatMessage, ChatRequest, ModelChoice};

pub const SUMMARY_MAX_TOKENS: u32 = 1500;
pub const ANSWER_MAX_TOKENS: u32 = 1000;
pub const TEMPERATURE: f32 = 0.3;

pub const SUMMARY_SYSTEM_PROMPT: &str = r#"You are a legal assistant specializing in Indian law. Your task is to summarize legal documents in plain English for non-lawyers. Focus on:

1. Key terms and conditions
2. Rights and obligations of parties
3. Important clauses (termination, payment, liability, etc.)
4. Potential risks or concerns
5. Next steps or deadlines

Always reference Indian legal context where applicable. Keep the summary clear, concise, and accessible. Highlight any critical legal clauses like indemnity, arbitration, termination, confidentiality, etc.

IMPORTANT: Always include a disclaimer that this is for informational purposes only and not legal advice."#;

pub const ANSWER_SYSTEM_PROMPT: &str = r#"You are a legal assistant specializing in Indian law. Provide accurate, helpful information about Indian legal matters including:

- Contract law under the Indian Contract Act, 1872
- Employment law and labor rights in India
- Property and tenancy laws
- Consumer protection laws
- Company law and business regulations
- Constitutional rights and civil liberties

Always:
1. Focus specifically on Indian laws and regulations
2. Cite relevant Indian acts or legal provisions when applicable
3. Provide practical, actionable guidance
4. Include appropriate disclaimers
5. Avoid references to US, UK, or other foreign legal systems unless for comparison

IMPORTANT: Always end responses with a clear disclaimer that this is general information only and not substitute for professional legal advice."#;

const SUMMARY_LEAD_IN: &str = "Please provide a plain-English summary of this legal document:";

pub const EXAMPLE_QUESTIONS: [&str; 8] = [
    "Can my landlord evict me without notice in India?",
    "What happens if I break a contract under Indian law?",
    "What are employee rights during termination in India?",
    "What is the notice period for resignation under Indian labor law?",
    "Can a company change my salary without my consent?",
    "What are the basic rights of consumers in India?",
    "How long is the limitation period for filing a civil suit in India?",
    "What constitutes unfair trade practices under Indian law?",
];

pub fn summary_request(document_text: &str, model: ModelChoice) -> ChatRequest {
    ChatRequest {
        model: model.model_id().to_string(),
        messages: vec![
            ChatMessage::system(SUMMARY_SYSTEM_PROMPT),
            ChatMessage::user(format!("{SUMMARY_LEAD_IN}\n\n{document_text}")),
        ],
        max_tokens: SUMMARY_MAX_TOKENS,
        temperature: TEMPERATURE,
    }
}

pub fn answer_request(question: &str, model: ModelChoice) -> ChatRequest {
    ChatRequest {
        model: model.model_id().to_string(),
        messages: vec![
            ChatMessage::system(ANSWER_SYSTEM_PROMPT),
            ChatMessage::user(question),
        ],
        max_tokens: ANSWER_MAX_TOKENS,
        temperature: TEMPERATURE,
    }
}
