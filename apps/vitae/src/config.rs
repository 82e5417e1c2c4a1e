use std::str::FromStr;

use anyhow::{Context, Result};

use crate::layout::PageGeometry;

/// Application configuration loaded from environment variables.
/// Every variable is optional; a present but unparsable value fails startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Page height the fitting engine measures against, in px.
    pub page_height_px: f64,
    /// Allowance above the page height before content counts as overflowing.
    pub page_tolerance_px: f64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let page_height_px: f64 =
            parse_env(&lookup, "PAGE_HEIGHT_PX", PageGeometry::A4.page_height_px)?;
        let page_tolerance_px: f64 =
            parse_env(&lookup, "PAGE_TOLERANCE_PX", PageGeometry::A4.tolerance_px)?;

        if !page_height_px.is_finite() || page_height_px <= 0.0 {
            anyhow::bail!("PAGE_HEIGHT_PX must be a positive number");
        }
        if !page_tolerance_px.is_finite() || page_tolerance_px < 0.0 {
            anyhow::bail!("PAGE_TOLERANCE_PX must be a non-negative number");
        }

        Ok(Config {
            port: parse_env(&lookup, "PORT", 8080)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            page_height_px,
            page_tolerance_px,
        })
    }

    pub fn page_geometry(&self) -> PageGeometry {
        PageGeometry {
            page_height_px: self.page_height_px,
            tolerance_px: self.page_tolerance_px,
        }
    }
}

fn parse_env<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        None => Ok(default),
    }
}
