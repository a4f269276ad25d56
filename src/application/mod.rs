//! Application layer: use cases and the per-chart session service.

pub mod chart_service;
pub mod use_cases;
