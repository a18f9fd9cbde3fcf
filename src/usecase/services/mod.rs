pub mod analysis_service;
pub mod distance_service;
pub mod ingest_service;
