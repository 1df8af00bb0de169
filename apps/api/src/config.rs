use anyhow::{bail, Context, Result};

use crate::valuation::pipeline::DEFAULT_FALLBACK_CEILING_MULTIPLIER;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub anthropic_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Ceiling over the company middle when the band has no `high`.
    pub fallback_ceiling_multiplier: f64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            fallback_ceiling_multiplier: match std::env::var("FALLBACK_CEILING_MULTIPLIER") {
                Ok(raw) => parse_multiplier(&raw)?,
                Err(_) => DEFAULT_FALLBACK_CEILING_MULTIPLIER,
            },
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_multiplier(raw: &str) -> Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .with_context(|| format!("FALLBACK_CEILING_MULTIPLIER '{raw}' is not a number"))?;
    if !value.is_finite() || value < 1.0 {
        bail!("FALLBACK_CEILING_MULTIPLIER must be a finite number >= 1.0, got {value}");
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_multiplier() {
        assert_eq!(parse_multiplier("1.2").unwrap(), 1.2);
        assert_eq!(parse_multiplier(" 1.0 ").unwrap(), 1.0);
        assert!(parse_multiplier("0.9").is_err());
        assert!(parse_multiplier("inf").is_err());
        assert!(parse_multiplier("NaN").is_err());
        assert!(parse_multiplier("abc").is_err());
    }
}
