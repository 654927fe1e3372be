mod commands;

use commands::{expand_example, parse, Command, ABOUT, HELP};
use legal_assistant::{
    Assistant, DocumentUpload, ModelChoice, NoticeLevel, QuestionOutcome, Settings,
    EXAMPLE_QUESTIONS,
};
use std::io::Write;
use std::path::Path;
use tokio::io::{AsyncBufReadExt, BufReader};

const DISCLAIMER: &str = "Disclaimer: this tool provides general information about Indian law for \
educational purposes only. It does not constitute legal advice and should not be relied upon for \
legal decisions. Always consult a qualified legal professional for specific legal matters.";

#[tokio::main]
async fn main() {
    // Initialize environment variables and logging
    dotenv::dotenv().ok();
    env_logger::init();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(1);
        }
    };

    log::info!(
        "Provider endpoint {} (default model {})",
        settings.base_url,
        settings.default_model
    );

    let assistant = match Assistant::new(&settings) {
        Ok(assistant) => assistant,
        Err(e) => {
            eprintln!("Failed to initialize the assistant: {:#}", e);
            std::process::exit(1);
        }
    };

    println!("AI Legal Assistant - document analysis & Indian law Q&A");
    println!("{}\n", DISCLAIMER);
    println!("{}\n", HELP);

    if let Err(e) = run(&assistant, settings.default_model).await {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(assistant: &Assistant, mut model: ModelChoice) -> anyhow::Result<()> {
    println!("Model: {} ({})", model, model.note());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut last_text = String::new();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            return Ok(());
        };

        match parse(&line) {
            Command::Summarize(path) => {
                if let Some(text) = summarize(assistant, &path, model).await {
                    last_text = text;
                }
            }
            Command::Ask(question) => {
                let question = expand_example(&question, &EXAMPLE_QUESTIONS);
                ask(assistant, &question, model).await
            }
            Command::Model(Some(choice)) => {
                model = choice;
                println!("Model: {} ({})", model, model.note());
            }
            Command::Model(None) => {
                for choice in ModelChoice::ALL {
                    let marker = if choice == model { "*" } else { " " };
                    println!("{} {} - {}", marker, choice, choice.note());
                }
            }
            Command::Examples => {
                for (i, question) in EXAMPLE_QUESTIONS.iter().enumerate() {
                    println!("  #{} {}", i + 1, question);
                }
            }
            Command::Text if last_text.is_empty() => println!("No extracted text yet."),
            Command::Text => println!("{}", last_text),
            Command::About => println!("{}", ABOUT),
            Command::Help => println!("{}", HELP),
            Command::Quit => return Ok(()),
            Command::Unknown(input) if input.is_empty() => {}
            Command::Unknown(input) => println!("Unknown command: {} (try `help`)", input),
        }
    }
}

/// Returns the extracted text when a summary was attempted.
async fn summarize(assistant: &Assistant, path: &str, model: ModelChoice) -> Option<String> {
    if path.is_empty() {
        println!("Usage: summarize <path.pdf>");
        return None;
    }

    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            println!("[error] Could not read {}: {}", path, e);
            return None;
        }
    };

    let path = Path::new(path);
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());
    let is_pdf = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);
    let upload = DocumentUpload {
        name,
        content_type: if is_pdf {
            "application/pdf".to_string()
        } else {
            "application/octet-stream".to_string()
        },
        bytes,
    };

    println!("Extracting text from PDF...");
    println!("Generating legal summary...");
    let analysis = assistant.analyze_document(upload, model).await;

    for notice in &analysis.notices {
        let tag = match notice.level {
            NoticeLevel::Info => "info",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Error => "error",
        };
        println!("[{}] {}", tag, notice.message);
    }

    let summary = analysis.summary?;
    println!("\nDocument Summary\n----------------");
    match summary {
        Ok(text) => println!("{}", text),
        Err(e) => println!("{}", e),
    }
    println!("\n(`text` shows the extracted text)");
    Some(analysis.extracted_text)
}

async fn ask(assistant: &Assistant, question: &str, model: ModelChoice) {
    if !question.trim().is_empty() {
        println!("Researching your question...");
    }
    match assistant.ask(question, model).await {
        QuestionOutcome::Skipped(reason) => println!("{}", reason),
        QuestionOutcome::Answered(Ok(answer)) => println!("\nAnswer\n------\n{}", answer),
        QuestionOutcome::Answered(Err(e)) => println!("{}", e),
    }
}
