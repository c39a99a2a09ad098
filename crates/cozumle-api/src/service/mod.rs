//! Service module

mod cozumle_api_service;

pub use cozumle_api_service::{CozumleApiService, CozumleApiServiceFull};
