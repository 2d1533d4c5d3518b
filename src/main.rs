mod config;
mod error;
mod form;
mod ai {
    pub mod client;
    pub mod persona;
    pub mod prompts;
}
mod web {
    pub mod page;
    pub mod routes;
}

use ai::client::{OpenAiClient, OPENAI_MODEL};
use config::Config;
use dotenv::dotenv;
use error::ExpertError;
use std::sync::Arc;
use web::routes::{AppState, router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = Config::from_env()?;
    if config.api_key.is_none() {
        log::warn!("OPENAI_API_KEY is not set; every submission will fail until it is");
    }

    serve(config).await?;

    Ok(())
}

async fn serve(config: Config) -> Result<(), ExpertError> {
    let state = AppState {
        backend: Arc::new(OpenAiClient::new(&config)?),
    };
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    println!("🤖 EXPERT AI READY");
    println!("🌐 Model {} via {}", OPENAI_MODEL, config.api_base);
    println!("📝 Open http://{}/ to ask a question\n", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
