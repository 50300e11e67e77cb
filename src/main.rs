use actix_web::{middleware::Logger, web::Data, App, HttpServer};
use dotenv::dotenv;
use log::info;

use rag_chat_relay::config::{self, Config};
use rag_chat_relay::model::{AzureChatModel, SYSTEM_PROMPT};
use rag_chat_relay::web::routes;
use rag_chat_relay::AppState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize environment
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::new().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .init();

    info!("Starting chat relay on {}:{}", config::HOST, config::PORT);

    // Missing values are reported by the adapter when a call is attempted
    let config = Config::from_env();
    let model = AzureChatModel::new(config, SYSTEM_PROMPT);

    let app_state = Data::new(AppState { model });

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(app_state.clone())
            .configure(routes::configure)
    })
    .bind((config::HOST, config::PORT))?
    .run()
    .await?;

    Ok(())
}
