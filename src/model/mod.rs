mod error;
pub mod payload;
mod prompt;

use log::{debug, info};
use reqwest::Client;

use crate::config::{self, Config};
use crate::web::models::{Message, Role};

pub use error::CompletionError;
pub use payload::{CompletionRequest, CompletionResponse, DataSource, SearchParameters};
pub use prompt::SYSTEM_PROMPT;

type Result<T> = std::result::Result<T, CompletionError>;

// A wrapper for an Azure OpenAI deployment grounded on an Azure AI Search index
pub struct AzureChatModel {
    config: Config,
    system_prompt: String,
    client: Client,
}

impl AzureChatModel {
    pub fn new(config: Config, system_prompt: impl Into<String>) -> Self {
        Self {
            config,
            system_prompt: system_prompt.into(),
            client: Client::new(),
        }
    }

    /// Chat completions URL of the configured deployment.
    pub fn completions_url(&self) -> Result<String> {
        let endpoint = required(&self.config.endpoint, config::ENDPOINT_VAR)?;
        let deployment = required(&self.config.deployment, config::DEPLOYMENT_VAR)?;

        Ok(format!(
            "{}/openai/deployments/{}/chat/completions",
            endpoint.trim_end_matches('/'),
            deployment
        ))
    }

    /// Builds the outbound body for one user message.
    ///
    /// The message sequence is always the system prompt followed by the user
    /// message, passed through untouched.
    pub fn build_request(&self, user_message: &str) -> Result<CompletionRequest> {
        let deployment = required(&self.config.deployment, config::DEPLOYMENT_VAR)?;
        let search_endpoint = required(&self.config.search_endpoint, config::SEARCH_ENDPOINT_VAR)?;
        let search_key = required(&self.config.search_key, config::SEARCH_KEY_VAR)?;

        let messages = vec![
            Message {
                role: Role::System,
                content: self.system_prompt.clone(),
            },
            Message {
                role: Role::User,
                content: user_message.to_string(),
            },
        ];

        Ok(CompletionRequest {
            model: deployment.to_string(),
            messages,
            max_tokens: payload::MAX_TOKENS,
            temperature: payload::TEMPERATURE,
            data_sources: vec![DataSource::AzureSearch(SearchParameters::semantic(
                search_endpoint,
                search_key,
            ))],
        })
    }

    pub async fn generate_response(&self, user_message: &str) -> Result<String> {
        let url = self.completions_url()?;
        let api_key = required(&self.config.api_key, config::API_KEY_VAR)?;
        let payload = self.build_request(user_message)?;

        info!("Sending completion request to deployment {}", payload.model);
        debug!(
            "Prompt: {} characters, index: {}",
            user_message.len(),
            payload::INDEX_NAME
        );

        let response = self
            .client
            .post(&url)
            .query(&[("api-version", self.config.api_version.as_str())])
            .header("api-key", api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(CompletionError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let completion: CompletionResponse = serde_json::from_str(&body)
            .map_err(|e| CompletionError::MalformedResponse(e.to_string()))?;

        let content = completion.into_first_content().ok_or_else(|| {
            CompletionError::MalformedResponse("no message content in first choice".to_string())
        })?;

        info!("Response length: {} characters", content.len());
        Ok(content)
    }
}

fn required<'a>(value: &'a Option<String>, var: &'static str) -> Result<&'a str> {
    value.as_deref().ok_or(CompletionError::MissingConfig(var))
}
