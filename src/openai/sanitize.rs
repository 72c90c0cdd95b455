//! Cleanup applied to raw model output before it reaches the caller

use std::sync::LazyLock;

use regex::Regex;

/// Hard cap on reply length to avoid runaway text
const MAX_REPLY_CHARS: usize = 300;

/// Substituted when nothing survives cleanup
const FALLBACK_REPLY: &str = "I'm not sure how to answer that.";

// Dialogue markers the model sometimes hallucinates despite the stop
// sequences. The word boundary is anchored at the start only so
// "Human: more text" is cut but "xAI: thing" is left alone.
static MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:Human|AI|You|User):").unwrap());

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Sanitize a raw completion into a single-line reply: cut at the
/// first hallucinated dialogue marker, normalize all whitespace runs
/// (including newlines and tabs) to single spaces, cap the length,
/// and fall back to a fixed string when nothing is left.
pub fn sanitize_reply(raw: &str) -> String {
    let cleaned = match MARKER.find(raw) {
        Some(m) => &raw[..m.start()],
        None => raw,
    };
    let cleaned = WHITESPACE_RUN.replace_all(cleaned.trim(), " ");
    let cleaned = cleaned.trim();

    let truncated: String = cleaned.chars().take(MAX_REPLY_CHARS).collect();
    if truncated.is_empty() {
        FALLBACK_REPLY.to_string()
    } else {
        truncated
    }
}
