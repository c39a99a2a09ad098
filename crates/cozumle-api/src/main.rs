//! cozumle-api server entry point

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cozumle_api::ApiError;
use cozumle_api::api::AppState;
use cozumle_api::api::run_server;
use cozumle_api::config::Config;
use cozumle_api::service::CozumleApiServiceFull;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // Logging: RUST_LOG wins, otherwise info for both crates
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new("cozumle=info,cozumle_api=info"));
  tracing_subscriber::registry().with(filter).with(tracing_subscriber::fmt::layer()).init();

  let config = Config::from_env()?;
  tracing::info!(
    bind_addr = %config.bind_addr(),
    informal = config.informal,
    lexicon_path = ?config.lexicon_path,
    max_words = config.max_words,
    "Configuration loaded"
  );

  // Building the graph is CPU-bound, keep it off the runtime threads
  let service_config = config.clone();
  let service =
    tokio::task::spawn_blocking(move || CozumleApiServiceFull::new(&service_config))
      .await
      .map_err(|e| ApiError::internal(format!("service initialization panicked: {e}")))??;
  tracing::info!("Morphology service initialized");

  let state = AppState::new(config, Arc::new(service));

  run_server(state).await
}
