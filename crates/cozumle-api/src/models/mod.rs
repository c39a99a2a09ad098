//! Models module

mod request;
mod response;

pub use request::{AnalyzeRequest, GenerateRequest};
pub use response::{
  AnalysisDto, AnalyzeResponse, GenerateResponse, GenerationDto, HealthResponse, MorphemeDto,
  WordDto,
};
