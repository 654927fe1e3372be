use crate::errors::{Flow, FlowError};
use crate::models::*;
use crate::openai_service::OpenAiService;
use crate::prompts;

/// The two LLM flows. Owns the provider client; every call borrows it.
pub struct LegalService {
    openai: OpenAiService,
}

impl LegalService {
    pub fn new(openai: OpenAiService) -> Self {
        Self { openai }
    }

    /// Plain-English summary of an extracted document.
    pub async fn summarize(
        &self,
        document_text: &str,
        model: ModelChoice,
    ) -> Result<String, FlowError> {
        log::info!(
            "Summarizing {} characters with {}",
            document_text.chars().count(),
            model
        );
        let request = prompts::summary_request(document_text, model);
        self.run(Flow::Summary, &request).await
    }

    /// Answer to a free-form question about Indian law.
    pub async fn answer(&self, question: &str, model: ModelChoice) -> Result<String, FlowError> {
        log::info!(
            "Answering a {}-character question with {}",
            question.chars().count(),
            model
        );
        let request = prompts::answer_request(question, model);
        self.run(Flow::Answer, &request).await
    }

    async fn run(&self, flow: Flow, request: &ChatRequest) -> Result<String, FlowError> {
        self.openai.complete(request).await.map_err(|e| {
            log::error!("{} flow failed: {:#}", flow.as_str(), e);
            FlowError::new(flow, &e)
        })
    }
}
