//! Voicebox API request and response models.
//!
//! Tool results are the `Display` rendering of these types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Settings of a Voicebox application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VoiceboxAppSettings {
    pub name: String,
    pub database: String,
    pub model: String,
    #[serde(default)]
    pub named_graphs: Vec<String>,
    #[serde(default)]
    pub reasoning: bool,
}

/// Answer to an ask or generate-query call.
///
/// Generate-query answers usually carry no `content`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VoiceboxAnswer {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub interpreted_question: Option<String>,
    #[serde(default)]
    pub sparql_query: Option<String>,
    #[serde(default)]
    pub conversation_id: Option<String>,
    #[serde(default)]
    pub message_id: Option<String>,
}

/// A question sent to a Voicebox application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoiceboxRequest {
    pub question: String,
    pub conversation_id: Option<String>,
    /// Per-call client id; the session's client id is used when absent.
    pub client_id: Option<String>,
    /// Stardog auth token acting on behalf of a specific user.
    pub auth_token_override: Option<String>,
}

impl VoiceboxRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            ..Default::default()
        }
    }
}

impl fmt::Display for VoiceboxAppSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Voicebox App Settings:")?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Database: {}", self.database)?;
        writeln!(f, "Model: {}", self.model)?;
        if !self.named_graphs.is_empty() {
            writeln!(f, "Named Graphs: {}", self.named_graphs.join(", "))?;
        }
        write!(f, "Reasoning: {}", self.reasoning)
    }
}

impl fmt::Display for VoiceboxAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = [
            ("Answer", &self.content),
            ("Interpreted Question", &self.interpreted_question),
            ("SPARQL Query", &self.sparql_query),
            ("Conversation ID", &self.conversation_id),
            ("Message ID", &self.message_id),
        ];

        let lines: Vec<String> = fields
            .iter()
            .filter_map(|(label, value)| value.as_ref().map(|v| format!("{}: {}", label, v)))
            .collect();

        f.write_str(&lines.join("\n"))
    }
}
