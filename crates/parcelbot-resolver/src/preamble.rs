//! The fixed instructional preamble sent ahead of non-tracking questions

/// System-style instructions prepended to every generative-answer request.
///
/// Describes the assistant's persona and capabilities, sets the tone, and
/// tells the model to hand off to human support when it does not know.
pub const PREAMBLE: &str = "\
Je bent Billie, de klantenservice chatbot van een e-commerce bedrijf.
Je kunt helpen met:
1. Pakket tracking - vraag om een Track & Trace code
2. Retourneren - voorwaarden en procedures
3. Betalingen - methoden en problemen
4. Algemene vragen over bestellingen

Wees vriendelijk, behulpzaam en bondig in je antwoorden.
Als je iets niet weet, adviseer dan contact op te nemen via de klantenservice telefoon.";

/// Assemble the full prompt for one user utterance.
pub(crate) fn build_prompt(utterance: &str) -> String {
    format!("{PREAMBLE}\n\nGebruikersvraag: {utterance}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_carries_preamble_and_utterance() {
        let prompt = build_prompt("Hoe kan ik mijn wachtwoord resetten?");
        assert!(prompt.starts_with("Je bent Billie"));
        assert!(prompt.ends_with("Gebruikersvraag: Hoe kan ik mijn wachtwoord resetten?"));
    }

    #[test]
    fn test_preamble_names_the_capabilities() {
        assert!(PREAMBLE.contains("Pakket tracking"));
        assert!(PREAMBLE.contains("Retourneren"));
        assert!(PREAMBLE.contains("Betalingen"));
        assert!(PREAMBLE.contains("bestellingen"));
    }
}
