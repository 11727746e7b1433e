//! # twentyone-nlu: Free-Text Intent Classification
//!
//! Turns whatever the player types at the table into a hit-or-stand
//! intent. Classification runs down a fixed ladder:
//!
//! 1. **Strict LLM tier** - if a language backend is configured, ask it
//!    for exactly one token and accept an exact `HIT`/`STAND` reply.
//! 2. **Soft LLM tier** - accept a reply that contains exactly one of
//!    the two tokens (models sometimes wrap the token in extra words).
//! 3. **Failure absorption** - any backend error is swallowed and the
//!    ladder falls through; classification never raises.
//! 4. **Keyword heuristics** - substring match against fixed keyword
//!    sets, hit words checked before stand words.
//! 5. **Conservative default** - `Stand`, the round-ending action.
//!
//! The backend is injected once at startup ([`IntentClassifier::new`]);
//! there is no hidden global and no per-call credential lookup.

use thiserror::Error;

pub mod openai;

/// Player intent recovered from free-form text.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Intent {
    /// The player wants another card
    Hit,
    /// The player does not want another card
    Stand,
}

/// Errors a language backend can produce. All of them are absorbed by
/// the classifier ladder; they exist so backends can be tested and so
/// callers can report *why* the LLM tiers are unavailable.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("backend returned status {0}")]
    Status(u16),
    #[error("response contained no completion text")]
    MissingContent,
}

/// A capability that completes a prompt with text. The production
/// implementation is [`openai::OpenAiBackend`]; tests substitute stubs.
pub trait LanguageBackend {
    fn complete(&self, prompt: &str) -> Result<String, BackendError>;
}

const HIT_WORDS: &[&str] = &[
    "hit", "deal", "another", "one more", "next card", "go again", "draw",
];
const STAND_WORDS: &[&str] = &[
    "stand", "pass", "no", "stop", "hold", "stick", "i'm good", "im good",
];

/// Keyword fallback tier. Hit keywords are checked before stand
/// keywords, so text matching both families ("hit stand") resolves to
/// [`Intent::Hit`]. Returns `None` when neither family matches.
pub fn keyword_intent(text: &str) -> Option<Intent> {
    let text = text.to_lowercase();
    if HIT_WORDS.iter().any(|w| text.contains(w)) {
        return Some(Intent::Hit);
    }
    if STAND_WORDS.iter().any(|w| text.contains(w)) {
        return Some(Intent::Stand);
    }
    None
}

fn classification_prompt(user_text: &str) -> String {
    format!(
        "You are a blackjack assistant. Classify the user's intent:\n\
         - Output exactly one token: HIT or STAND.\n\
         - HIT means the user wants another card.\n\
         - STAND means the user does not want another card.\n\
         User: {user_text}\n"
    )
}

/// Total classifier over free-form text: always returns exactly one
/// [`Intent`], never errors, never panics.
pub struct IntentClassifier {
    backend: Option<Box<dyn LanguageBackend>>,
}

impl IntentClassifier {
    /// Build a classifier with an optional language backend. Passing
    /// `None` disables the LLM tiers entirely.
    pub fn new(backend: Option<Box<dyn LanguageBackend>>) -> Self {
        Self { backend }
    }

    /// Classifier that runs on keyword heuristics alone.
    pub fn heuristics_only() -> Self {
        Self::new(None)
    }

    pub fn has_backend(&self) -> bool {
        self.backend.is_some()
    }

    pub fn classify(&self, text: &str) -> Intent {
        if let Some(intent) = self.try_llm(text) {
            return intent;
        }
        keyword_intent(text).unwrap_or(Intent::Stand)
    }

    /// LLM tiers as one fallible step. Any backend error becomes `None`
    /// and the ladder falls through to the heuristics.
    fn try_llm(&self, text: &str) -> Option<Intent> {
        let backend = self.backend.as_deref()?;
        let reply = backend.complete(&classification_prompt(text)).ok()?;
        let reply = reply.trim().to_uppercase();
        match reply.as_str() {
            "HIT" => return Some(Intent::Hit),
            "STAND" => return Some(Intent::Stand),
            _ => {}
        }
        // Soft parse for replies that wrap the token in extra words.
        match (reply.contains("HIT"), reply.contains("STAND")) {
            (true, false) => Some(Intent::Hit),
            (false, true) => Some(Intent::Stand),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedReply(&'static str);

    impl LanguageBackend for FixedReply {
        fn complete(&self, _prompt: &str) -> Result<String, BackendError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingBackend;

    impl LanguageBackend for FailingBackend {
        fn complete(&self, _prompt: &str) -> Result<String, BackendError> {
            Err(BackendError::MissingContent)
        }
    }

    fn with_reply(reply: &'static str) -> IntentClassifier {
        IntentClassifier::new(Some(Box::new(FixedReply(reply))))
    }

    #[test]
    fn strict_tier_accepts_exact_tokens() {
        assert_eq!(with_reply("HIT").classify("whatever"), Intent::Hit);
        assert_eq!(with_reply("STAND").classify("whatever"), Intent::Stand);
        // Normalization: trim + uppercase before comparing.
        assert_eq!(with_reply("  hit \n").classify("whatever"), Intent::Hit);
    }

    #[test]
    fn soft_tier_accepts_wrapped_tokens() {
        assert_eq!(
            with_reply("I would hit here.").classify("whatever"),
            Intent::Hit
        );
        assert_eq!(
            with_reply("The answer is STAND.").classify("whatever"),
            Intent::Stand
        );
    }

    #[test]
    fn ambiguous_reply_falls_through_to_heuristics() {
        // Reply mentions both tokens, so the LLM tiers are inconclusive
        // and the user's own text decides.
        assert_eq!(
            with_reply("HIT or STAND, hard to say").classify("deal me one"),
            Intent::Hit
        );
        assert_eq!(
            with_reply("HIT or STAND, hard to say").classify("zzz"),
            Intent::Stand
        );
    }

    #[test]
    fn backend_failure_is_absorbed() {
        let classifier = IntentClassifier::new(Some(Box::new(FailingBackend)));
        assert_eq!(classifier.classify("deal me one"), Intent::Hit);
        assert_eq!(classifier.classify("i'll pass"), Intent::Stand);
        assert_eq!(classifier.classify(""), Intent::Stand);
    }

    #[test]
    fn heuristics_recognize_both_keyword_families() {
        let classifier = IntentClassifier::heuristics_only();
        for text in ["hit me", "deal me one", "one more please", "go again", "draw"] {
            assert_eq!(classifier.classify(text), Intent::Hit, "{:?}", text);
        }
        for text in ["I stand", "pass", "stop", "hold", "stick", "I'm good", "im good"] {
            assert_eq!(classifier.classify(text), Intent::Stand, "{:?}", text);
        }
    }

    #[test]
    fn hit_keywords_take_precedence_over_stand_keywords() {
        let classifier = IntentClassifier::heuristics_only();
        assert_eq!(classifier.classify("hit stand"), Intent::Hit);
        // "another" contains the substring "no"; the hit family is
        // checked first so it still reads as a hit.
        assert_eq!(classifier.classify("another"), Intent::Hit);
    }

    #[test]
    fn unmatched_text_defaults_to_stand() {
        let classifier = IntentClassifier::heuristics_only();
        assert_eq!(classifier.classify(""), Intent::Stand);
        assert_eq!(classifier.classify("xyzzy"), Intent::Stand);
        assert_eq!(classifier.classify("???!"), Intent::Stand);
    }

    #[test]
    fn classify_is_total_over_arbitrary_input() {
        let classifier = IntentClassifier::heuristics_only();
        let long = "x".repeat(10_000);
        let inputs = [
            "",
            " ",
            "hit stand",
            "stand hit",
            "HIT",
            "\u{1F0CF} joker",
            "line\nbreak",
            "ünïcode",
            long.as_str(),
        ];
        for text in inputs {
            let intent = classifier.classify(text);
            assert!(matches!(intent, Intent::Hit | Intent::Stand));
        }
    }
}
