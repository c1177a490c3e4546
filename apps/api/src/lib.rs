//! Resume builder backend: editable resume records, completeness scoring, a pluggable
//! writing assistant, and template-driven export.

pub mod assistant;
pub mod config;
pub mod editor;
pub mod errors;
pub mod export;
pub mod models;
pub mod routes;
pub mod scoring;
pub mod state;
