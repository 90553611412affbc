//! Site-wide timings and display options, loaded from `site.json`.
use crate::notice::NoticeTiming;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub interval_ms: u32,
    pub wrap: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: 5000,
            wrap: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Visible fraction that counts as "in view".
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: String::from("0px 0px -50px 0px"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyConfig {
    pub code: String,
    pub locale: String,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            code: String::from("INR"),
            locale: String::from("en-IN"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub search_delay_ms: u32,
    pub contact_delay_ms: u32,
    pub success_notice_ms: u32,
    pub toast: NoticeTiming,
    /// Scroll offset in pixels past which the navbar is marked scrolled.
    pub nav_scroll_threshold: f64,
    pub carousel: CarouselConfig,
    pub reveal: RevealConfig,
    pub currency: CurrencyConfig,
    /// Price dropdown labels, parsed by [`crate::filter::PriceRange::parse`].
    pub price_ranges: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            search_delay_ms: 2000,
            contact_delay_ms: 2000,
            success_notice_ms: 5000,
            toast: NoticeTiming::default(),
            nav_scroll_threshold: 100.0,
            carousel: CarouselConfig::default(),
            reveal: RevealConfig::default(),
            currency: CurrencyConfig::default(),
            price_ranges: vec![
                String::from("₹1000 - ₹2000"),
                String::from("₹2000 - ₹3000"),
                String::from("₹3000+"),
            ],
        }
    }
}

impl SiteConfig {
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
