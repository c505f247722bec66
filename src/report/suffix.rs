//! Model name decoration for downstream consumers.
//!
//! A small ordered vocabulary of capability suffixes decorates model
//! display names. `Llmsvd` is the verification attestation marker and is
//! always the terminal suffix when a model is verified.

use super::types::VerificationResult;

/// Ordered suffix vocabulary. Ordering here is the ordering in decorated
/// names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suffix {
    Brotli,
    Http3,
    Toon,
    Streaming,
    FreeToUse,
    OpenSource,
    Fast,
    Llmsvd,
}

impl Suffix {
    pub const ALL: [Suffix; 8] = [
        Suffix::Brotli,
        Suffix::Http3,
        Suffix::Toon,
        Suffix::Streaming,
        Suffix::FreeToUse,
        Suffix::OpenSource,
        Suffix::Fast,
        Suffix::Llmsvd,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Suffix::Brotli => "brotli",
            Suffix::Http3 => "http3",
            Suffix::Toon => "toon",
            Suffix::Streaming => "streaming",
            Suffix::FreeToUse => "free to use",
            Suffix::OpenSource => "open source",
            Suffix::Fast => "fast",
            Suffix::Llmsvd => "llmsvd",
        }
    }
}

/// Decorate a model name with the applicable suffixes in vocabulary order.
///
/// `Llmsvd` cannot be requested through `applied`; it is appended last iff
/// `verified` is true.
pub fn decorate(base: &str, applied: &[Suffix], verified: bool) -> String {
    let mut name = base.to_string();
    for suffix in Suffix::ALL {
        if suffix == Suffix::Llmsvd {
            continue;
        }
        if applied.contains(&suffix) {
            name.push_str(&format!(" ({})", suffix.label()));
        }
    }
    if verified {
        name.push_str(&format!(" ({})", Suffix::Llmsvd.label()));
    }
    name
}

/// Derive the suffixes a result earns on its own: streaming when detected,
/// fast when the responsiveness axis is high.
pub fn suffixes_for(result: &VerificationResult) -> Vec<Suffix> {
    let mut suffixes = Vec::new();
    if result.features.streaming {
        suffixes.push(Suffix::Streaming);
    }
    if result.scores.responsiveness >= 80.0 {
        suffixes.push(Suffix::Fast);
    }
    suffixes
}

/// Decorated display name for a result.
pub fn display_name(result: &VerificationResult) -> String {
    decorate(
        &result.model_info.display_name,
        &suffixes_for(result),
        result.verified(),
    )
}
