//! Wire types for the Azure OpenAI chat completions API with an
//! Azure AI Search data source attached.

use serde::{Deserialize, Serialize};

use crate::web::models::Message;

pub const MAX_TOKENS: u32 = 800;
pub const TEMPERATURE: f32 = 0.7;

pub const INDEX_NAME: &str = "large-data-index-v10";
pub const SEMANTIC_CONFIGURATION: &str = "default";
pub const CONTENT_FIELDS_SEPARATOR: &str = "\n";
pub const CONTENT_FIELDS: [&str; 4] = ["content", "resolution", "description", "symptom"];

#[derive(Debug, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub max_tokens: u32,
    pub temperature: f32,
    pub data_sources: Vec<DataSource>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", content = "parameters", rename_all = "snake_case")]
pub enum DataSource {
    AzureSearch(SearchParameters),
}

#[derive(Debug, Serialize)]
pub struct SearchParameters {
    pub endpoint: String,
    pub index_name: String,
    pub semantic_configuration: String,
    pub query_type: QueryType,
    pub fields_mapping: FieldsMapping,
    pub authentication: SearchAuthentication,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryType {
    Semantic,
}

#[derive(Debug, Serialize)]
pub struct FieldsMapping {
    pub content_fields_separator: String,
    pub content_fields: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SearchAuthentication {
    ApiKey { key: String },
}

impl SearchParameters {
    /// Semantic search over the support index, authenticated with a shared key.
    pub fn semantic(endpoint: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            index_name: INDEX_NAME.to_string(),
            semantic_configuration: SEMANTIC_CONFIGURATION.to_string(),
            query_type: QueryType::Semantic,
            fields_mapping: FieldsMapping {
                content_fields_separator: CONTENT_FIELDS_SEPARATOR.to_string(),
                content_fields: CONTENT_FIELDS.iter().map(|f| f.to_string()).collect(),
            },
            authentication: SearchAuthentication::ApiKey { key: key.into() },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

impl CompletionResponse {
    /// Text of the first choice, if the service produced one.
    pub fn into_first_content(self) -> Option<String> {
        self.choices.into_iter().next().and_then(|c| c.message.content)
    }
}
