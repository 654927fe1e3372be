//! Shared fixtures for the integration tests: in-memory PDFs and an
//! assistant wired to an `httpmock` server standing in for the provider.

// Not every test file uses every helper.
#![allow(unused)]

use httpmock::prelude::{HttpMockRequest, MockServer};
use legal_assistant::{
    Assistant, DocumentProcessor, LegalService, ModelChoice, OpenAiService, Settings,
};
use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str};
use serde_json::{json, Value};
use std::path::PathBuf;

pub const COMPLETIONS_PATH: &str = "/v1/chat/completions";
pub const TEST_API_KEY: &str = "sk-test-key";
pub const TEST_BEARER: &str = "Bearer sk-test-key";

/// Builds a PDF with one page per entry. An empty entry produces a page with
/// no text layer.
pub fn generate_test_pdf(pages: &[&str]) -> Vec<u8> {
    let mut pdf = Pdf::new();

    let catalog_id = Ref::new(1);
    let page_tree_id = Ref::new(2);
    let font_id = Ref::new(3);
    let font_name = Name(b"F1");

    let ids: Vec<(Ref, Ref)> = (0..pages.len() as i32)
        .map(|i| (Ref::new(4 + 2 * i), Ref::new(5 + 2 * i)))
        .collect();

    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id)
        .kids(ids.iter().map(|(page_id, _)| *page_id))
        .count(pages.len() as i32);

    for (text, (page_id, content_id)) in pages.iter().zip(ids.iter().copied()) {
        let mut page = pdf.page(page_id);
        page.media_box(Rect::new(0.0, 0.0, 595.0, 842.0));
        page.parent(page_tree_id);
        page.contents(content_id);
        page.resources().fonts().pair(font_name, font_id);
        page.finish();

        let mut content = Content::new();
        if !text.is_empty() {
            content.begin_text();
            content.set_font(font_name, 14.0);
            content.next_line(72.0, 720.0);
            content.show(Str(text.as_bytes()));
            content.end_text();
        }
        pdf.stream(content_id, &content.finish());
    }

    pdf.type1_font(font_id)
        .base_font(Name(b"Helvetica"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    pdf.finish()
}

pub fn test_settings(server: &MockServer) -> Settings {
    Settings {
        api_key: TEST_API_KEY.to_string(),
        base_url: server.url("/v1"),
        default_model: ModelChoice::Fast,
        secrets_path: PathBuf::new(),
    }
}

pub fn legal_service(server: &MockServer) -> LegalService {
    let openai = OpenAiService::new(&test_settings(server)).expect("client should build");
    LegalService::new(openai)
}

pub fn test_assistant(server: &MockServer) -> Assistant {
    Assistant::from_parts(legal_service(server), DocumentProcessor::new())
        .expect("assistant should build")
}

pub fn completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}

/// True when the request carries exactly one system and one user message, in
/// that order.
pub fn has_system_then_user(req: &HttpMockRequest) -> bool {
    let Some(body) = req.body.as_ref() else {
        return false;
    };
    let Ok(value) = serde_json::from_slice::<Value>(body) else {
        return false;
    };
    match value["messages"].as_array() {
        Some(messages) => {
            messages.len() == 2
                && messages[0]["role"] == "system"
                && messages[1]["role"] == "user"
        }
        None => false,
    }
}
