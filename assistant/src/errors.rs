use thiserror::Error;

/// Why a PDF produced no text.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("the uploaded file is empty")]
    Empty,
    #[error("failed to stage the PDF on disk: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse PDF content: {0}")]
    Parse(String),
    #[error("the PDF parser crashed while reading the document")]
    Panicked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Summary,
    Answer,
}

impl Flow {
    pub fn as_str(&self) -> &'static str {
        match self {
            Flow::Summary => "summary",
            Flow::Answer => "answer",
        }
    }
}

/// A failed provider call. The display form is the in-band message shown to
/// the user, e.g. `Error generating summary: 401 Unauthorized`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Error generating {}: {detail}", .flow.as_str())]
pub struct FlowError {
    pub flow: Flow,
    pub detail: String,
}

impl FlowError {
    pub fn new(flow: Flow, err: &anyhow::Error) -> Self {
        // `{:#}` keeps the whole context chain on one line.
        Self {
            flow,
            detail: format!("{:#}", err),
        }
    }
}
