//! Per-session chat state.
//!
//! The session exclusively owns the ordered turn list and the message
//! counter. It is created per chat invocation and passed into the loop
//! explicitly; no process-wide mutable state exists.

use parcelbot_domain::ChatTurn;

/// Greeting appended as the first assistant turn of every session.
pub const WELCOME: &str = "Hallo! Ik ben Billie. Hoe kan ik je helpen vandaag? \
    Je kunt me vragen stellen over je pakket, retourneren, betalingen of iets anders!";

/// One chat session: the append-only turn log plus a user-message counter.
#[derive(Debug)]
pub struct Session {
    turns: Vec<ChatTurn>,
    message_count: usize,
}

impl Session {
    /// Start a session with the welcome turn already appended.
    pub fn new() -> Self {
        Self {
            turns: vec![ChatTurn::assistant(WELCOME)],
            message_count: 0,
        }
    }

    /// Record a user utterance.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.turns.push(ChatTurn::user(content));
        self.message_count += 1;
    }

    /// Record an assistant reply.
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.turns.push(ChatTurn::assistant(content));
    }

    /// The full turn log, in order, welcome turn included.
    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    /// Turns after the welcome message, for the history view.
    pub fn history(&self) -> &[ChatTurn] {
        &self.turns[1..]
    }

    /// Number of user messages this session.
    pub fn message_count(&self) -> usize {
        self.message_count
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parcelbot_domain::ChatRole;

    #[test]
    fn test_session_starts_with_welcome() {
        let session = Session::new();
        assert_eq!(session.turns().len(), 1);
        assert_eq!(session.turns()[0].role, ChatRole::Assistant);
        assert_eq!(session.turns()[0].content, WELCOME);
        assert_eq!(session.message_count(), 0);
    }

    #[test]
    fn test_turns_append_in_order() {
        let mut session = Session::new();
        session.push_user("waar is mijn pakket?");
        session.push_assistant("onderweg");
        session.push_user("dank je");

        let roles: Vec<ChatRole> = session.turns().iter().map(|t| t.role).collect();
        assert_eq!(
            roles,
            vec![
                ChatRole::Assistant,
                ChatRole::User,
                ChatRole::Assistant,
                ChatRole::User
            ]
        );
    }

    #[test]
    fn test_only_user_turns_are_counted() {
        let mut session = Session::new();
        session.push_user("een");
        session.push_assistant("antwoord");
        session.push_user("twee");
        assert_eq!(session.message_count(), 2);
    }

    #[test]
    fn test_history_skips_the_welcome_turn() {
        let mut session = Session::new();
        session.push_user("vraag");
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].content, "vraag");
    }
}
