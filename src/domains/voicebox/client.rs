//! Stardog Cloud Voicebox API client.
//!
//! `CloudClient` opens an application session for an app API token;
//! `VoiceboxApp` runs calls against that application. The tool dispatcher
//! only depends on these traits.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use super::error::{ClientError, ClientResult};
use super::models::{VoiceboxAnswer, VoiceboxAppSettings, VoiceboxRequest};

/// Header carrying the Voicebox client id.
pub const CLIENT_ID_HEADER: &str = "X-Client-Id";

/// Header carrying a Stardog auth token override.
pub const AUTH_TOKEN_OVERRIDE_HEADER: &str = "X-SD-Auth-Token";

/// Default Stardog Cloud API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://cloud.stardog.com/api";

/// Entry point to the cloud API.
pub trait CloudClient: Send + Sync {
    /// Open a session for the Voicebox application owning `api_token`.
    fn voicebox_app(&self, api_token: &str, client_id: Option<&str>) -> Box<dyn VoiceboxApp>;
}

/// Operations on one Voicebox application.
#[async_trait]
pub trait VoiceboxApp: Send + Sync {
    /// Fetch the application settings.
    async fn settings(&self) -> ClientResult<VoiceboxAppSettings>;

    /// Ask a question and get a natural language answer.
    async fn ask(&self, request: &VoiceboxRequest) -> ClientResult<VoiceboxAnswer>;

    /// Generate a SPARQL query for a question.
    async fn generate_query(&self, request: &VoiceboxRequest) -> ClientResult<VoiceboxAnswer>;
}

/// HTTP implementation of [`CloudClient`].
#[derive(Debug, Clone)]
pub struct StardogCloudClient {
    base_url: String,
    http: reqwest::Client,
}

impl StardogCloudClient {
    /// Create a client for `endpoint`.
    ///
    /// The timeout applies to every request made through this client.
    pub fn new(endpoint: &str, timeout: Option<Duration>) -> ClientResult<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("voicebox-mcp-server/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: endpoint.trim_end_matches('/').to_string(),
            http: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl CloudClient for StardogCloudClient {
    fn voicebox_app(&self, api_token: &str, client_id: Option<&str>) -> Box<dyn VoiceboxApp> {
        Box::new(VoiceboxAppSession {
            base_url: self.base_url.clone(),
            http: self.http.clone(),
            api_token: api_token.to_string(),
            client_id: client_id.map(str::to_string),
        })
    }
}

/// A Voicebox application bound to its app API token.
struct VoiceboxAppSession {
    base_url: String,
    http: reqwest::Client,
    api_token: String,
    client_id: Option<String>,
}

#[derive(Debug, Serialize)]
struct QuestionBody<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    conversation_id: Option<&'a str>,
}

impl VoiceboxAppSession {
    fn url(&self, path: &str) -> String {
        format!("{}/v1/voicebox/{}", self.base_url, path)
    }

    fn authorized(
        &self,
        builder: reqwest::RequestBuilder,
        client_id: Option<&str>,
        auth_token_override: Option<&str>,
    ) -> reqwest::RequestBuilder {
        let mut builder = builder.bearer_auth(&self.api_token);
        if let Some(client_id) = client_id.or(self.client_id.as_deref()) {
            builder = builder.header(CLIENT_ID_HEADER, client_id);
        }
        if let Some(token) = auth_token_override {
            builder = builder.header(AUTH_TOKEN_OVERRIDE_HEADER, token);
        }
        builder
    }

    async fn post_question<T: DeserializeOwned>(
        &self,
        path: &str,
        request: &VoiceboxRequest,
    ) -> ClientResult<T> {
        debug!("Voicebox POST {}", path);

        let body = QuestionBody {
            query: &request.question,
            conversation_id: request.conversation_id.as_deref(),
        };
        let builder = self.authorized(
            self.http.post(self.url(path)),
            request.client_id.as_deref(),
            request.auth_token_override.as_deref(),
        );

        decode(builder.json(&body).send().await?).await
    }
}

#[async_trait]
impl VoiceboxApp for VoiceboxAppSession {
    async fn settings(&self) -> ClientResult<VoiceboxAppSettings> {
        debug!("Voicebox GET settings");
        let builder = self.authorized(self.http.get(self.url("settings")), None, None);
        decode(builder.send().await?).await
    }

    async fn ask(&self, request: &VoiceboxRequest) -> ClientResult<VoiceboxAnswer> {
        self.post_question("ask", request).await
    }

    async fn generate_query(&self, request: &VoiceboxRequest) -> ClientResult<VoiceboxAnswer> {
        self.post_question("generate_query", request).await
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(ClientError::status(status.as_u16(), body));
    }
    Ok(serde_json::from_str(&body)?)
}
