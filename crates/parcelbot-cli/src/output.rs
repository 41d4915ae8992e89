//! Output formatting for the CLI.

use colored::*;
use parcelbot_domain::{ChatRole, ChatTurn, TrackingRecord};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Static text behind the package-status shortcut.
pub const SHORTCUT_STATUS: &str = "Voor pakketstatus: geef je Track & Trace code op. \
    Bijvoorbeeld: 'Waar is mijn pakket met code 3SAB123456789NL?'";

/// Static text behind the returns shortcut.
pub const SHORTCUT_RETURNS: &str = "Retourneren kan binnen 30 dagen. \
    Meld je retour aan via 'Mijn Account' op onze website.";

/// Static capability card, shown by the info command.
pub const INFO_CARD: &str = "Wat kan ik voor je doen?\n\
    - Pakket status opvragen\n\
    - Retour informatie\n\
    - Betalingsvragen\n\
    - Bestelinfo\n\
    - Algemene vragen";

/// Output formatter.
pub struct Formatter {
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// Format one chat turn with its role prefix.
    pub fn chat_turn(&self, turn: &ChatTurn) -> String {
        match turn.role {
            ChatRole::User => format!("{} {}", self.colorize("jij:", "cyan"), turn.content),
            ChatRole::Assistant => {
                format!("{} {}", self.colorize("billie:", "green"), turn.content)
            }
        }
    }

    /// Format sample dataset rows as a table.
    pub fn format_samples(&self, records: &[TrackingRecord]) -> String {
        if records.is_empty() {
            return self.colorize("Geen tracking data geladen.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["TrackTraceCode", "Vervoerder", "Status"]);

        for record in records {
            builder.push_record([&record.code, &record.carrier, &record.status]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {message}"), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {message}"), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {message}"), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> TrackingRecord {
        TrackingRecord {
            code: "3SAB123456789NL".to_string(),
            carrier: "PostNL".to_string(),
            expected_arrival: "2024-05-01".to_string(),
            status: "In transit".to_string(),
            note: None,
        }
    }

    #[test]
    fn test_samples_table_shows_the_display_columns() {
        let formatter = Formatter::new(false);
        let output = formatter.format_samples(&[record()]);
        assert!(output.contains("TrackTraceCode"));
        assert!(output.contains("3SAB123456789NL"));
        assert!(output.contains("PostNL"));
        // Expected arrival is not part of the sample view
        assert!(!output.contains("2024-05-01"));
    }

    #[test]
    fn test_empty_samples() {
        let formatter = Formatter::new(false);
        let output = formatter.format_samples(&[]);
        assert!(output.contains("Geen tracking data"));
    }

    #[test]
    fn test_chat_turn_prefixes() {
        let formatter = Formatter::new(false);
        assert!(formatter.chat_turn(&ChatTurn::user("hoi")).starts_with("jij:"));
        assert!(formatter
            .chat_turn(&ChatTurn::assistant("hallo"))
            .starts_with("billie:"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(false);
        assert_eq!(formatter.error("mis"), "✗ mis");
    }
}
