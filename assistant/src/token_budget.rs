use crate::models::ModelChoice;
use anyhow::Result;
use tiktoken_rs::CoreBPE;

/// Document tokens allowed in a summary prompt. Leaves room for the system
/// prompt and the 1500-token reply inside each model's context window.
pub fn document_budget(model: ModelChoice) -> usize {
    match model {
        ModelChoice::Fast => 14_000,
        ModelChoice::Advanced => 6_000,
    }
}

pub struct TokenBudget {
    bpe: CoreBPE,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Fitted {
    pub text: String,
    pub original_tokens: usize,
    pub truncated: bool,
}

impl TokenBudget {
    pub fn new() -> Result<Self> {
        Ok(Self {
            bpe: tiktoken_rs::cl100k_base()?,
        })
    }

    /// Cuts `text` to at most `max_tokens` tokens.
    pub fn fit(&self, text: &str, max_tokens: usize) -> Fitted {
        let tokens = self.bpe.encode_with_special_tokens(text);
        let original_tokens = tokens.len();
        if original_tokens <= max_tokens {
            return Fitted {
                text: text.to_string(),
                original_tokens,
                truncated: false,
            };
        }

        // A cut can land inside a multi-byte character; keep the bytes up to
        // the last whole one.
        let bytes = self.bpe._decode_native(&tokens[..max_tokens]);
        let text = match std::str::from_utf8(&bytes) {
            Ok(decoded) => decoded.to_string(),
            Err(e) => String::from_utf8_lossy(&bytes[..e.valid_up_to()]).into_owned(),
        };

        Fitted {
            text,
            original_tokens,
            truncated: true,
        }
    }
}
