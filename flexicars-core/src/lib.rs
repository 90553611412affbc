//! FlexiCars core
//!
//! Platform-agnostic logic for the FlexiCars rental site: the listing catalog and its
//! filters, form validation and submission lifecycle, notices, storage helpers and the
//! state behind page effects. No browser dependencies live here.

pub mod config;
pub mod contact;
pub mod effects;
pub mod filter;
pub mod form;
pub mod listing;
pub mod money;
pub mod notice;
pub mod search;
pub mod storage;

pub use config::{CarouselConfig, ConfigError, CurrencyConfig, RevealConfig, SiteConfig};
pub use contact::{ContactField, ContactFields, ValidationError, validate};
pub use effects::{Reveal, lift_style, nav_scrolled, next_slide, prev_slide};
pub use filter::{
    ALL_BRANDS, ALL_CATEGORIES, ANY_PRICE, FilterSelection, PriceRange, Selection, Showroom,
    filter,
};
pub use form::{
    FormError, FormKind, FormPhase, FormTransport, Receipt, SimulatedTransport, Sleep,
    SubmitButton, Submission, drive,
};
pub use listing::{Catalog, CatalogError, Fuel, Item, Specs, Transmission, rental_message};
pub use notice::{
    Notice, NoticeBoard, NoticeId, NoticeStage, NoticeTiming, Severity, connectivity_notice,
};
pub use search::{LAST_SEARCH_KEY, SearchQuery};
pub use storage::{JsonStore, KeyValueStore, MemoryStore, StorageError};

/// Source of the embedded site data. The web crate reads bundled JSON; tests can
/// supply fixtures.
pub trait DataLoader {
    type Error: std::error::Error + 'static;

    /// Load the listing catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read or fails validation.
    fn load_catalog(&self) -> Result<Catalog, Self::Error>;

    /// Load site timings and display options.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be read or parsed.
    fn load_site_config(&self) -> Result<SiteConfig, Self::Error>;
}

/// Load both data sets, logging failures and substituting an empty catalog or the
/// default configuration so the page still renders.
pub fn load_or_default<L: DataLoader>(loader: &L) -> (Catalog, SiteConfig) {
    let catalog = loader.load_catalog().unwrap_or_else(|e| {
        log::error!("Failed to load catalog: {e}");
        Catalog::default()
    });
    let config = loader.load_site_config().unwrap_or_else(|e| {
        log::error!("Failed to load site config: {e}");
        SiteConfig::default()
    });
    (catalog, config)
}
