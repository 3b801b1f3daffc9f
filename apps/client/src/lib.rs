//! MarketMind client: turns campaign, pitch and lead requests into
//! platform-specific previews of the generated content.

pub mod cli;
pub mod config;
pub mod errors;
pub mod forms;
pub mod media;
pub mod models;
pub mod orchestrator;
pub mod poster;
pub mod presentation;
pub mod render;
pub mod scorecard;
pub mod service;
