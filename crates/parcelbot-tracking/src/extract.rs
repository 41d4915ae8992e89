//! Tracking-code extraction from free-form text

use regex::Regex;
use tracing::debug;

/// Pulls the single best tracking-code candidate out of user text.
///
/// The input is uppercased before matching, so extraction is
/// case-insensitive on the source text and the returned code is always
/// uppercase. A fixed, ordered rule list is applied; the first acceptable
/// match of the first rule that produces one wins, and at most one candidate
/// is ever returned.
///
/// Rule order is carrier-specific shape first, so that the generic
/// alphanumeric rule cannot shadow it by matching a substring of a
/// carrier-prefixed code:
///
/// 1. optional leading digit, 2-3 letters, 8-15 digits, 2 letters
///    (PostNL-style prefixed codes such as 3SAB123456789NL)
/// 2. generic alphanumeric token of length 10-20
/// 3. purely numeric token of length 10-15
///
/// The leading digit is part of the carrier rule because PostNL codes start
/// with one; without it there is no word boundary before the letters and the
/// rule could never match the flagship format.
///
/// A candidate must contain at least one digit. Uppercasing turns every long
/// ordinary word into a 10+ character `[A-Z0-9]` token ("WACHTWOORD"), and no
/// real tracking code is letters-only, so digit-free matches are skipped.
pub struct CodeExtractor {
    rules: Vec<Regex>,
}

impl CodeExtractor {
    /// Compile the fixed rule list.
    pub fn new() -> Self {
        let rules = [
            r"\b[0-9]?[A-Z]{2,3}[0-9]{8,15}[A-Z]{2}\b",
            r"\b[A-Z0-9]{10,20}\b",
            r"\b[0-9]{10,15}\b",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("fixed extraction pattern must compile"))
        .collect();

        Self { rules }
    }

    /// Extract a candidate tracking code from `text`.
    ///
    /// Returns `None` when no rule matches; the caller treats that as the
    /// signal to take the generative-answer path rather than as an error.
    pub fn extract(&self, text: &str) -> Option<String> {
        let upper = text.to_uppercase();

        for (idx, rule) in self.rules.iter().enumerate() {
            let candidate = rule
                .find_iter(&upper)
                .find(|m| m.as_str().bytes().any(|b| b.is_ascii_digit()));

            if let Some(m) = candidate {
                debug!(rule = idx, code = m.as_str(), "tracking code extracted");
                return Some(m.as_str().to_string());
            }
        }

        debug!("no tracking code in utterance");
        None
    }
}

impl Default for CodeExtractor {
    fn default() -> Self {
        Self::new()
    }
}
