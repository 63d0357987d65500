use crate::error::{Error, Result};
use dotenvy::dotenv;
use reqwest::Url;
use std::env;

pub const DEFAULT_API_URL: &str = "http://localhost:3000/";

pub struct Config {
    pub api_url: Url,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let api_url = match env::var("HEROES_API_URL") {
            Ok(val) => val,
            Err(_) => DEFAULT_API_URL.to_string(),
        };

        Ok(Self {
            api_url: parse_base_url(&api_url)?,
        })
    }
}

/// Parses a base url, adding the trailing slash `Url::join` needs to keep the last segment.
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let raw = raw.trim();
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    Url::parse(&normalized).map_err(|e| Error::Other(format!("invalid base url {raw}: {e}")))
}
