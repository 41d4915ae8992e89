//! Interactive chat loop.

use crate::error::{CliError, Result};
use crate::output::{Formatter, SHORTCUT_RETURNS, SHORTCUT_STATUS};
use crate::session::Session;
use parcelbot_domain::TextGenerator;
use parcelbot_resolver::Resolver;
use parcelbot_tracking::TrackingDataset;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Sample rows shown by the `samples` command.
const SAMPLE_ROWS: usize = 10;

/// Run the interactive chat session.
pub fn run_chat<P>(resolver: &Resolver<P>, formatter: &Formatter) -> Result<()>
where
    P: TextGenerator,
{
    let mut session = Session::new();

    println!(
        "{}",
        formatter.info("Parcelbot chat - typ 'help' voor commando's, 'exit' om te stoppen")
    );
    println!("{}", formatter.chat_turn(&session.turns()[0]));
    println!();

    let mut editor = DefaultEditor::new().map_err(|e| {
        CliError::Io(std::io::Error::other(format!(
            "Failed to initialize editor: {e}"
        )))
    })?;

    let history_path = history_path()?;
    let _ = editor.load_history(&history_path);

    loop {
        match editor.readline("jij> ") {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_command(line) {
                    ChatCommand::Exit => {
                        println!("{}", formatter.info("Tot ziens!"));
                        break;
                    }
                    ChatCommand::Help => print_help(formatter),
                    ChatCommand::Samples => {
                        println!("{}", samples_view(resolver.dataset(), formatter));
                    }
                    ChatCommand::History => print_history(&session, formatter),
                    ChatCommand::Shortcut(text) => {
                        println!("{}", formatter.info(text));
                    }
                    ChatCommand::Utterance => {
                        session.push_user(line);
                        let answer = resolver.respond(line);
                        let turn = parcelbot_domain::ChatTurn::assistant(answer);
                        println!("{}", formatter.chat_turn(&turn));
                        session.push_assistant(turn.content);
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Gebruik 'exit' om te stoppen"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {err}")));
                break;
            }
        }
    }

    editor.save_history(&history_path).ok();

    Ok(())
}

/// Render up to [`SAMPLE_ROWS`] dataset rows.
pub fn samples_view(dataset: &TrackingDataset, formatter: &Formatter) -> String {
    let n = dataset.len().min(SAMPLE_ROWS);
    formatter.format_samples(&dataset.records()[..n])
}

/// Commands recognized inside the chat loop; anything else is an utterance
/// for the resolver.
enum ChatCommand {
    Exit,
    Help,
    Samples,
    History,
    Shortcut(&'static str),
    Utterance,
}

fn parse_command(line: &str) -> ChatCommand {
    match line.to_lowercase().as_str() {
        "exit" | "quit" | "q" => ChatCommand::Exit,
        "help" | "?" => ChatCommand::Help,
        "samples" => ChatCommand::Samples,
        "history" => ChatCommand::History,
        "status" => ChatCommand::Shortcut(SHORTCUT_STATUS),
        "retour" => ChatCommand::Shortcut(SHORTCUT_RETURNS),
        _ => ChatCommand::Utterance,
    }
}

fn print_history(session: &Session, formatter: &Formatter) {
    if session.history().is_empty() {
        println!("{}", formatter.info("Nog geen chatgeschiedenis"));
        return;
    }

    println!("{}", formatter.info("Jouw gesprek:"));
    for turn in session.history() {
        println!("  {}", formatter.chat_turn(turn));
    }
    println!(
        "{}",
        formatter.info(&format!("Berichten deze sessie: {}", session.message_count()))
    );
}

fn history_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
    let dir = home.join(".parcelbot");
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Beschikbare commando's:"));
    println!();
    println!("  samples        - Toon voorbeeld tracking codes");
    println!("  history        - Toon je chatgeschiedenis");
    println!("  status         - Hoe vraag je een pakketstatus op");
    println!("  retour         - Retourvoorwaarden");
    println!("  help, ?        - Toon deze hulp");
    println!("  exit, quit, q  - Stop de chat");
    println!();
    println!("  Al het andere wordt als vraag aan Billie gesteld.");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use parcelbot_domain::TrackingRecord;
    use parcelbot_llm::MockProvider;

    #[test]
    fn test_command_parsing() {
        assert!(matches!(parse_command("exit"), ChatCommand::Exit));
        assert!(matches!(parse_command("Q"), ChatCommand::Exit));
        assert!(matches!(parse_command("help"), ChatCommand::Help));
        assert!(matches!(parse_command("samples"), ChatCommand::Samples));
        assert!(matches!(parse_command("history"), ChatCommand::History));
        assert!(matches!(parse_command("retour"), ChatCommand::Shortcut(_)));
        assert!(matches!(
            parse_command("waar is mijn pakket?"),
            ChatCommand::Utterance
        ));
    }

    #[test]
    fn test_samples_view_caps_at_ten_rows() {
        let records: Vec<TrackingRecord> = (0..25)
            .map(|i| TrackingRecord {
                code: format!("3SAB12345678{i:02}NL"),
                carrier: "PostNL".to_string(),
                expected_arrival: "2024-05-01".to_string(),
                status: "In transit".to_string(),
                note: None,
            })
            .collect();
        let dataset = TrackingDataset::from_records(records);
        let formatter = Formatter::new(false);

        let view = samples_view(&dataset, &formatter);
        assert!(view.contains("3SAB1234567809NL"));
        assert!(!view.contains("3SAB1234567810NL"));
    }

    #[test]
    fn test_samples_view_with_empty_dataset() {
        let formatter = Formatter::new(false);
        let view = samples_view(&TrackingDataset::empty(), &formatter);
        assert!(view.contains("Geen tracking data"));
    }

    // run_chat itself needs a terminal; the pieces around it are covered
    // here and the resolver flow is covered in parcelbot-resolver.
    #[test]
    fn test_resolver_wiring_compiles_for_mock_provider() {
        let resolver = Resolver::new(TrackingDataset::empty(), MockProvider::default());
        let _ = resolver.respond("hallo");
    }
}
