//! Bundled site data and browser persistence.
use crate::dom;
use anyhow::Context;
use flexicars_core::{
    Catalog, CatalogError, ConfigError, DataLoader, JsonStore, KeyValueStore, SiteConfig,
    StorageError, load_or_default,
};
use serde::Deserialize;
use thiserror::Error;

const CARS_JSON: &str = include_str!("../static/assets/data/cars.json");
const SITE_JSON: &str = include_str!("../static/assets/data/site.json");
const TESTIMONIALS_JSON: &str = include_str!("../static/assets/data/testimonials.json");

#[derive(Debug, Error)]
pub enum WebDataError {
    #[error("catalog: {0}")]
    Catalog(#[from] CatalogError),
    #[error("site config: {0}")]
    Config(#[from] ConfigError),
}

/// Reads the JSON compiled into the bundle.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebDataLoader;

impl DataLoader for WebDataLoader {
    type Error = WebDataError;

    fn load_catalog(&self) -> Result<Catalog, Self::Error> {
        Ok(Catalog::from_json(CARS_JSON)?)
    }

    fn load_site_config(&self) -> Result<SiteConfig, Self::Error> {
        Ok(SiteConfig::from_json(SITE_JSON)?)
    }
}

/// Everything the page needs at startup.
///
/// Falls back per data set when the bundle is broken, so a bad catalog never takes
/// the timing config down with it.
#[must_use]
pub fn load_site() -> (Catalog, SiteConfig) {
    match try_load_site(&WebDataLoader) {
        Ok(loaded) => loaded,
        Err(e) => {
            log::error!("Failed to load bundled site data: {e:#}");
            load_or_default(&WebDataLoader)
        }
    }
}

fn try_load_site<L: DataLoader>(loader: &L) -> anyhow::Result<(Catalog, SiteConfig)>
where
    L::Error: Send + Sync,
{
    let catalog = loader
        .load_catalog()
        .context("loading bundled catalog")?;
    let config = loader
        .load_site_config()
        .context("loading bundled site config")?;
    log::debug!("loaded {} listings", catalog.len());
    Ok((catalog, config))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub city: String,
}

/// Customer quotes for the home page carousel; empty if the bundle is broken.
#[must_use]
pub fn testimonials() -> Vec<Testimonial> {
    serde_json::from_str(TESTIMONIALS_JSON).unwrap_or_else(|e| {
        log::error!("Failed to parse testimonials: {e}");
        Vec::new()
    })
}

/// `localStorage` as a [`KeyValueStore`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WebStorage;

fn backend_error(e: &wasm_bindgen::JsValue) -> StorageError {
    StorageError::Backend(dom::js_error_message(e))
}

impl KeyValueStore for WebStorage {
    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        dom::local_storage()
            .and_then(|storage| storage.set_item(key, value))
            .map_err(|e| backend_error(&e))
    }

    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        dom::local_storage()
            .and_then(|storage| storage.get_item(key))
            .map_err(|e| backend_error(&e))
    }

    fn remove_raw(&self, key: &str) -> Result<(), StorageError> {
        dom::local_storage()
            .and_then(|storage| storage.remove_item(key))
            .map_err(|e| backend_error(&e))
    }
}

#[must_use]
pub const fn browser_store() -> JsonStore<WebStorage> {
    JsonStore::new(WebStorage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_data_loads_cleanly() {
        let (catalog, config) = try_load_site(&WebDataLoader).expect("bundle is valid");
        assert_eq!(catalog.len(), 6);
        assert_eq!(config.contact_delay_ms, 2000);
        assert_eq!(load_site().0, catalog);
        assert_eq!(testimonials().len(), 3);
    }

    struct BrokenCatalog;

    impl DataLoader for BrokenCatalog {
        type Error = WebDataError;

        fn load_catalog(&self) -> Result<Catalog, Self::Error> {
            Ok(Catalog::from_json("{\"items\": 3}")?)
        }

        fn load_site_config(&self) -> Result<SiteConfig, Self::Error> {
            Ok(SiteConfig::default())
        }
    }

    #[test]
    fn load_errors_carry_context() {
        let err = try_load_site(&BrokenCatalog).expect_err("catalog is malformed");
        let rendered = format!("{err:#}");
        assert!(rendered.starts_with("loading bundled catalog: catalog: JSON parsing error"));
    }
}
