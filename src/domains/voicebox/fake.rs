//! In-memory `CloudClient` for tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::client::{CloudClient, VoiceboxApp};
use super::error::{ClientError, ClientResult};
use super::models::{VoiceboxAnswer, VoiceboxAppSettings, VoiceboxRequest};

/// A recorded call against the fake client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FakeCall {
    Open {
        api_token: String,
        client_id: Option<String>,
    },
    Settings,
    Ask(VoiceboxRequest),
    GenerateQuery(VoiceboxRequest),
}

/// Fake client returning canned responses, or failing with a fixed message.
#[derive(Clone, Default)]
pub struct FakeCloudClient {
    calls: Arc<Mutex<Vec<FakeCall>>>,
    failure: Option<String>,
}

impl FakeCloudClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// A client whose every app call fails with `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<FakeCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn settings_fixture() -> VoiceboxAppSettings {
        VoiceboxAppSettings {
            name: "test-vbx-app-1".to_string(),
            database: "flight-db-2".to_string(),
            model: "flight_plan".to_string(),
            named_graphs: vec!["tag:stardog:api:context:local".to_string()],
            reasoning: true,
        }
    }

    pub fn answer_fixture() -> VoiceboxAnswer {
        VoiceboxAnswer {
            content: Some("Test answer".to_string()),
            interpreted_question: Some("What is the flight plan?".to_string()),
            sparql_query: Some("SELECT * WHERE { ?s ?p ?o }".to_string()),
            conversation_id: Some("conv-1".to_string()),
            message_id: Some("msg-1".to_string()),
        }
    }

    pub fn query_fixture() -> VoiceboxAnswer {
        VoiceboxAnswer {
            content: None,
            interpreted_question: Some("Show me all flights".to_string()),
            sparql_query: Some("SELECT * WHERE { ?flight ?hasPlan ?plan }".to_string()),
            conversation_id: Some("conv-2".to_string()),
            message_id: Some("msg-2".to_string()),
        }
    }
}

impl CloudClient for FakeCloudClient {
    fn voicebox_app(&self, api_token: &str, client_id: Option<&str>) -> Box<dyn VoiceboxApp> {
        self.calls.lock().unwrap().push(FakeCall::Open {
            api_token: api_token.to_string(),
            client_id: client_id.map(str::to_string),
        });
        Box::new(self.clone())
    }
}

impl FakeCloudClient {
    fn record(&self, call: FakeCall) -> ClientResult<()> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some(message) => Err(ClientError::api(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl VoiceboxApp for FakeCloudClient {
    async fn settings(&self) -> ClientResult<VoiceboxAppSettings> {
        self.record(FakeCall::Settings)?;
        Ok(Self::settings_fixture())
    }

    async fn ask(&self, request: &VoiceboxRequest) -> ClientResult<VoiceboxAnswer> {
        self.record(FakeCall::Ask(request.clone()))?;
        Ok(Self::answer_fixture())
    }

    async fn generate_query(&self, request: &VoiceboxRequest) -> ClientResult<VoiceboxAnswer> {
        self.record(FakeCall::GenerateQuery(request.clone()))?;
        Ok(Self::query_fixture())
    }
}
