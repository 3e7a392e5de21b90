//! Voicebox tools module.
//!
//! - `settings`: settings of the Voicebox application
//! - `ask`: natural language question answering
//! - `generate_query`: SPARQL generation from a question
//!
//! Each tool has handlers for both HTTP and STDIO transports. All of them
//! delegate to the shared `ToolDispatcher`.

pub mod ask;
pub mod common;
pub mod generate_query;
pub mod settings;

pub use ask::VoiceboxAskTool;
pub use common::{VoiceboxQuestionParams, VoiceboxSettingsParams};
pub use generate_query::VoiceboxGenerateQueryTool;
pub use settings::VoiceboxSettingsTool;
