//! API State Definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::CozumleApiService;

/// Application State
///
/// State shared across the entire server.
/// Contains configuration and service.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Morphology Service
  ///
  /// - Production: `Arc::new(CozumleApiServiceFull::new(&config)?)`
  /// - Test: `Arc::new(StubCozumleApiService)`
  pub service: Arc<dyn CozumleApiService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<dyn CozumleApiService>) -> Self {
    Self { config, service }
  }
}
