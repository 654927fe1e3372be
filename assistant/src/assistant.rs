use crate::config::Settings;
use crate::document_processor::{DocumentProcessor, Extraction};
use crate::errors::{ExtractError, FlowError};
use crate::legal_service::LegalService;
use crate::models::*;
use crate::openai_service::OpenAiService;
use crate::token_budget::{document_budget, TokenBudget};
use anyhow::Result;
use std::fmt;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";
pub const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;
pub const MAX_QUESTION_CHARS: usize = 4_000;
/// Below this many characters the extraction probably missed most of the document.
pub const LOW_TEXT_THRESHOLD: usize = 50;

#[derive(Debug)]
pub struct DocumentAnalysis {
    pub extracted_text: String,
    pub notices: Vec<Notice>,
    /// `None` when summarization was skipped.
    pub summary: Option<Result<String, FlowError>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    Empty,
    TooLong { chars: usize, limit: usize },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Empty => write!(f, "Please enter a question."),
            SkipReason::TooLong { chars, limit } => write!(
                f,
                "Question is {} characters long; the limit is {}.",
                chars, limit
            ),
        }
    }
}

#[derive(Debug)]
pub enum QuestionOutcome {
    Skipped(SkipReason),
    Answered(Result<String, FlowError>),
}

/// Entry point for a shell: applies the upload and question rules, then
/// hands off to the extractor and the LLM flows.
pub struct Assistant {
    legal: LegalService,
    processor: DocumentProcessor,
    budget: TokenBudget,
}

impl Assistant {
    pub fn new(settings: &Settings) -> Result<Self> {
        let openai = OpenAiService::new(settings)?;
        Self::from_parts(LegalService::new(openai), DocumentProcessor::new())
    }

    pub fn from_parts(legal: LegalService, processor: DocumentProcessor) -> Result<Self> {
        Ok(Self {
            legal,
            processor,
            budget: TokenBudget::new()?,
        })
    }

    pub async fn analyze_document(
        &self,
        upload: DocumentUpload,
        model: ModelChoice,
    ) -> DocumentAnalysis {
        let mut notices = Vec::new();

        if !is_pdf_content_type(&upload.content_type) {
            notices.push(Notice::error(format!(
                "Only PDF uploads are supported (got '{}').",
                upload.content_type
            )));
            return DocumentAnalysis::skipped(notices);
        }

        if upload.bytes.len() > MAX_UPLOAD_BYTES {
            notices.push(Notice::error(format!(
                "{} is {} bytes; uploads are limited to {} bytes.",
                upload.name,
                upload.bytes.len(),
                MAX_UPLOAD_BYTES
            )));
            return DocumentAnalysis::skipped(notices);
        }

        notices.push(Notice::info(format!("Uploaded: {}", upload.name)));

        let extraction = self.extract(upload.bytes).await;
        if let Some(e) = &extraction.error {
            notices.push(Notice::error(format!(
                "Error extracting text from PDF: {}",
                e
            )));
        }

        let text = extraction.text;
        if text.is_empty() {
            notices.push(Notice::error(
                "No text found in the PDF. Scanned documents are not supported.",
            ));
            return DocumentAnalysis::skipped(notices);
        }

        let chars = text.chars().count();
        if chars < LOW_TEXT_THRESHOLD {
            notices.push(Notice::warning(
                "Very little text extracted. The document might be scanned or have formatting issues.",
            ));
        } else {
            notices.push(Notice::info(format!(
                "Extracted {} characters from the document",
                chars
            )));
        }

        let limit = document_budget(model);
        let fitted = self.budget.fit(&text, limit);
        if fitted.truncated {
            log::warn!(
                "Document has {} tokens, cut to {} for {}",
                fitted.original_tokens,
                limit,
                model
            );
            notices.push(Notice::warning(format!(
                "The document is about {} tokens; only the first {} are summarized with {}.",
                fitted.original_tokens, limit, model
            )));
        }

        let summary = self.legal.summarize(&fitted.text, model).await;

        DocumentAnalysis {
            extracted_text: text,
            notices,
            summary: Some(summary),
        }
    }

    pub async fn ask(&self, question: &str, model: ModelChoice) -> QuestionOutcome {
        if question.trim().is_empty() {
            return QuestionOutcome::Skipped(SkipReason::Empty);
        }

        let chars = question.chars().count();
        if chars > MAX_QUESTION_CHARS {
            return QuestionOutcome::Skipped(SkipReason::TooLong {
                chars,
                limit: MAX_QUESTION_CHARS,
            });
        }

        QuestionOutcome::Answered(self.legal.answer(question, model).await)
    }

    /// PDF parsing is CPU-bound, so it runs on the blocking pool.
    async fn extract(&self, bytes: Vec<u8>) -> Extraction {
        let processor = self.processor.clone();
        match tokio::task::spawn_blocking(move || processor.extract(&bytes)).await {
            Ok(extraction) => extraction,
            Err(e) => {
                log::error!("Extraction task failed: {}", e);
                Extraction {
                    text: String::new(),
                    error: Some(ExtractError::Panicked),
                }
            }
        }
    }
}

impl DocumentAnalysis {
    fn skipped(notices: Vec<Notice>) -> Self {
        Self {
            extracted_text: String::new(),
            notices,
            summary: None,
        }
    }
}

fn is_pdf_content_type(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .map(|mime| mime.trim().eq_ignore_ascii_case(PDF_CONTENT_TYPE))
        .unwrap_or(false)
}
