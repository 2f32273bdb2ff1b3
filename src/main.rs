use std::{io::Error, sync::Arc};

use poem::{Server, listener::TcpListener};
use tokio::main;
use tracing::{info, warn};

use user_management::{
    build_app,
    config::Config,
    infrastructure::{logger, repositories::InMemoryUserRepository, seed::seed_if_empty},
    presentation::http::app::DOCS_PREFIX,
};

#[main]
async fn main() -> Result<(), Error> {
    let config = Config::try_parse().map_err(Error::other)?;
    logger::init(&config.log_filter);

    if config.api_key.is_none() {
        warn!("API_KEY is not set; every protected request will fail with 500");
    }

    let repo = Arc::new(InMemoryUserRepository::new());
    seed_if_empty(repo.as_ref()).await.map_err(Error::other)?;

    let server_url = config.server_url();
    info!("Starting server at {server_url} (docs at {server_url}{DOCS_PREFIX})");

    let app = build_app(&config, repo);

    Server::new(TcpListener::bind(format!("{}:{}", config.host, config.port)))
        .run(app)
        .await
}
