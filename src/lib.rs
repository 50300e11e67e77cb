pub mod config;
pub mod model;
pub mod web;

use model::AzureChatModel;

// App state structure
pub struct AppState {
    pub model: AzureChatModel,
}
