use legal_assistant::ModelChoice;

#[derive(Debug, PartialEq)]
pub enum Command {
    Summarize(String),
    Ask(String),
    Model(Option<ModelChoice>),
    Examples,
    Text,
    About,
    Help,
    Quit,
    Unknown(String),
}

pub const HELP: &str = "Commands:
  summarize <path.pdf>   summarize a legal PDF
  ask <question>         ask a question about Indian law
  ask #<n>               ask example question n (see `examples`)
  model [fast|advanced]  show or switch the model
  examples               list example questions
  text                   show the text extracted from the last PDF
  about                  legal areas covered and privacy notes
  help                   show this help
  quit                   exit";

pub const ABOUT: &str = "About:
  Summarizes legal documents and answers questions about Indian law in plain English.

Legal areas covered:
  - Contract Law
  - Employment & Labor Law
  - Property & Tenancy
  - Consumer Protection
  - Company Law
  - Constitutional Rights
  - Civil & Commercial Law

Privacy:
  Documents and questions are sent to the configured OpenAI endpoint for processing.
  Avoid uploading sensitive confidential documents.";

pub fn parse(line: &str) -> Command {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head.to_ascii_lowercase().as_str() {
        "summarize" | "summarise" => Command::Summarize(rest.to_string()),
        "ask" => Command::Ask(rest.to_string()),
        "model" if rest.is_empty() => Command::Model(None),
        "model" => match rest.parse() {
            Ok(model) => Command::Model(Some(model)),
            Err(_) => Command::Unknown(line.to_string()),
        },
        "examples" => Command::Examples,
        "text" => Command::Text,
        "about" => Command::About,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}

/// Resolves `#3` to the third example question.
pub fn expand_example(question: &str, examples: &[&str]) -> String {
    question
        .strip_prefix('#')
        .and_then(|n| n.trim().parse::<usize>().ok())
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| examples.get(i))
        .map(|q| q.to_string())
        .unwrap_or_else(|| question.to_string())
}
