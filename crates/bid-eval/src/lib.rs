//! Rule-based bid evaluation: capacity, financial and risk scoring combined into
//! a weighted overall score and an accept/reject/review recommendation.

pub mod config;
pub mod error;
pub mod evaluation;
pub mod import;
pub mod telemetry;
