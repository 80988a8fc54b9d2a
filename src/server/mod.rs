//! HTTP surface: wire models, routes, and handlers

mod models;
mod routes;

pub use models::{
    AnalyzeRequest, ErrorResponse, FeatureDto, GenerateRequest, GenerateResponse, HealthResponse,
    TechDto,
};
pub use routes::{create_router, AppState};
