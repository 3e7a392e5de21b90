//! Voicebox tool dispatcher.
//!
//! Resolves credentials for each call, validates the question, calls the
//! Voicebox API once and renders the response as text. API failures are
//! logged and wrapped in [`ToolError::Execution`] tagged with the tool name;
//! resolution and validation errors are returned as they are.

use std::future::Future;
use std::sync::Arc;
use tracing::{debug, error};

use crate::core::config::CredentialsConfig;
use crate::core::headers::RequestHeaders;
use crate::domains::voicebox::{CloudClient, VoiceboxRequest};

use super::error::ToolError;
use super::interceptor::{InterceptorChain, ToolInterceptor, TracingInterceptor};
use super::params::{Credential, resolve_credential};

/// Name of the settings tool.
pub const SETTINGS_TOOL: &str = "voicebox_settings";

/// Name of the ask tool.
pub const ASK_TOOL: &str = "voicebox_ask";

/// Name of the SPARQL generation tool.
pub const GENERATE_QUERY_TOOL: &str = "voicebox_generate_query";

const QUESTION_REQUIRED: &str = "A valid question is required to execute the tool";

/// Credentials resolved for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ResolvedCredentials {
    api_token: String,
    client_id: Option<String>,
    auth_token_override: Option<String>,
}

/// Dispatches Voicebox tool calls to a [`CloudClient`].
#[derive(Clone)]
pub struct ToolDispatcher {
    client: Arc<dyn CloudClient>,
    defaults: Arc<CredentialsConfig>,
    interceptors: InterceptorChain,
}

impl ToolDispatcher {
    /// Create a dispatcher with the tracing interceptor installed.
    pub fn new(client: Arc<dyn CloudClient>, defaults: CredentialsConfig) -> Self {
        Self {
            client,
            defaults: Arc::new(defaults),
            interceptors: InterceptorChain::new().with(Arc::new(TracingInterceptor)),
        }
    }

    /// Append an interceptor to the chain.
    pub fn with_interceptor(mut self, interceptor: Arc<dyn ToolInterceptor>) -> Self {
        self.interceptors = self.interceptors.with(interceptor);
        self
    }

    /// Replace the interceptor chain.
    pub fn with_interceptors(mut self, interceptors: InterceptorChain) -> Self {
        self.interceptors = interceptors;
        self
    }

    /// Get the settings of the Voicebox application.
    pub async fn settings(&self, headers: &RequestHeaders) -> Result<String, ToolError> {
        self.intercept(SETTINGS_TOOL, async {
            let api_token = self.resolve_api_token(headers)?;
            let client_id = self.resolve(headers, Credential::ClientId)?;

            let app = self.client.voicebox_app(&api_token, client_id.as_deref());
            match app.settings().await {
                Ok(settings) => Ok(settings.to_string()),
                Err(e) => {
                    error!("Error occurred while fetching Voicebox settings: {}", e);
                    Err(ToolError::execution(SETTINGS_TOOL, e.to_string()))
                }
            }
        })
        .await
    }

    /// Ask a question and return the natural language answer.
    pub async fn ask(
        &self,
        headers: &RequestHeaders,
        question: &str,
        conversation_id: Option<&str>,
    ) -> Result<String, ToolError> {
        self.intercept(ASK_TOOL, async {
            let (app_credentials, request) =
                self.prepare_question(headers, question, conversation_id)?;

            let app = self.client.voicebox_app(
                &app_credentials.api_token,
                app_credentials.client_id.as_deref(),
            );
            match app.ask(&request).await {
                Ok(answer) => Ok(answer.to_string()),
                Err(e) => {
                    error!("Error occurred while asking question: {}", e);
                    Err(ToolError::execution(ASK_TOOL, e.to_string()))
                }
            }
        })
        .await
    }

    /// Generate a SPARQL query for a natural language question.
    pub async fn generate_query(
        &self,
        headers: &RequestHeaders,
        question: &str,
        conversation_id: Option<&str>,
    ) -> Result<String, ToolError> {
        self.intercept(GENERATE_QUERY_TOOL, async {
            let (app_credentials, request) =
                self.prepare_question(headers, question, conversation_id)?;

            let app = self.client.voicebox_app(
                &app_credentials.api_token,
                app_credentials.client_id.as_deref(),
            );
            match app.generate_query(&request).await {
                Ok(answer) => Ok(answer.to_string()),
                Err(e) => {
                    error!("Error occurred while generating SPARQL query: {}", e);
                    Err(ToolError::execution(GENERATE_QUERY_TOOL, e.to_string()))
                }
            }
        })
        .await
    }

    async fn intercept<F>(&self, tool: &str, call: F) -> Result<String, ToolError>
    where
        F: Future<Output = Result<String, ToolError>>,
    {
        self.interceptors.enter(tool);
        let result = call.await;
        self.interceptors.exit(tool, result.as_deref());
        result
    }

    fn prepare_question(
        &self,
        headers: &RequestHeaders,
        question: &str,
        conversation_id: Option<&str>,
    ) -> Result<(ResolvedCredentials, VoiceboxRequest), ToolError> {
        let credentials = ResolvedCredentials {
            api_token: self.resolve_api_token(headers)?,
            client_id: self.resolve(headers, Credential::ClientId)?,
            auth_token_override: self.resolve(headers, Credential::AuthTokenOverride)?,
        };

        if question.is_empty() {
            return Err(ToolError::invalid_arguments(QUESTION_REQUIRED));
        }

        debug!(
            has_conversation = conversation_id.is_some(),
            has_override = credentials.auth_token_override.is_some(),
            "Prepared Voicebox question"
        );

        let request = VoiceboxRequest {
            question: question.to_string(),
            conversation_id: conversation_id.map(str::to_string),
            client_id: credentials.client_id.clone(),
            auth_token_override: credentials.auth_token_override.clone(),
        };
        Ok((credentials, request))
    }

    fn resolve_api_token(&self, headers: &RequestHeaders) -> Result<String, ToolError> {
        self.resolve(headers, Credential::ApiToken)?
            .ok_or_else(|| ToolError::missing_parameter(Credential::ApiToken.error_message()))
    }

    fn resolve(
        &self,
        headers: &RequestHeaders,
        credential: Credential,
    ) -> Result<Option<String>, ToolError> {
        resolve_credential(headers, credential, self.defaults.fallback(credential))
    }
}
