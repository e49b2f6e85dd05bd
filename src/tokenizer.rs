use once_cell::sync::Lazy;
use tiktoken_rs::{CoreBPE, o200k_base};

static TOK: Lazy<CoreBPE> = Lazy::new(|| o200k_base().expect("tokenizer init failed"));

/// Count tokens in a string using the shared CoreBPE tokenizer
#[inline]
pub fn count(text: &str) -> usize {
    TOK.encode_with_special_tokens(text).len()
}

/// Format a token count for the digest summary ("532", "14.2k", "1.3M").
pub fn format_estimate(tokens: usize) -> String {
    if tokens >= 1_000_000 {
        format!("{:.1}M", tokens as f64 / 1_000_000.0)
    } else if tokens >= 1_000 {
        format!("{:.1}k", tokens as f64 / 1_000.0)
    } else {
        tokens.to_string()
    }
}
