//! cozumle-api crate
//!
//! Web server providing Turkish morphological analysis and word generation as HTTP API.
//!
//! ## Endpoints
//! - `POST /analyze` - Morphological Analysis
//! - `POST /generate` - Word Generation
//! - `GET /health` - Health Check
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:5540/analyze \
//!   -H "Content-Type: application/json" \
//!   -d '{"text": "Kitaplarımı Ankara'\''ya götürdüm."}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{AnalyzeRequest, AnalyzeResponse, GenerateRequest, GenerateResponse};
pub use service::CozumleApiServiceFull;
