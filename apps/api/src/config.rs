use anyhow::{Context, Result};

use crate::assistant::ats::default_keywords;

/// Application configuration loaded from environment variables.
/// Every variable is optional; defaults suit local development.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Simulated round trip of the mock assistant, in milliseconds.
    pub suggestion_latency_ms: u64,
    pub ats_keywords: Vec<String>,
    pub cors_permissive: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            suggestion_latency_ms: lookup("SUGGESTION_LATENCY_MS")
                .unwrap_or_else(|| "1000".to_string())
                .parse::<u64>()
                .context("SUGGESTION_LATENCY_MS must be a whole number of milliseconds")?,
            ats_keywords: match lookup("ATS_KEYWORDS") {
                Some(list) => parse_keywords(&list)?,
                None => default_keywords(),
            },
            cors_permissive: match lookup("CORS_PERMISSIVE") {
                Some(flag) => parse_flag(&flag)
                    .with_context(|| format!("CORS_PERMISSIVE must be true or false, got '{flag}'"))?,
                None => true,
            },
        })
    }
}

fn parse_keywords(list: &str) -> Result<Vec<String>> {
    let keywords: Vec<String> = list
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect();
    anyhow::ensure!(!keywords.is_empty(), "ATS_KEYWORDS must name at least one keyword");
    Ok(keywords)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
