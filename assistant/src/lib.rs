pub mod assistant;
pub mod config;
pub mod document_processor;
pub mod errors;
pub mod legal_service;
pub mod models;
pub mod openai_service;
pub mod prompts;
pub mod token_budget;

pub use assistant::{Assistant, DocumentAnalysis, QuestionOutcome, SkipReason};
pub use config::Settings;
pub use document_processor::{DocumentProcessor, Extraction};
pub use errors::{ExtractError, Flow, FlowError};
pub use legal_service::LegalService;
pub use models::*;
pub use openai_service::OpenAiService;
pub use prompts::EXAMPLE_QUESTIONS;
