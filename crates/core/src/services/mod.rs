pub mod conversion_service;
pub mod rate_service;
pub mod series_service;
