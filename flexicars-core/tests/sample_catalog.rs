use flexicars_core::{
    ALL_BRANDS, ALL_CATEGORIES, ANY_PRICE, Catalog, CatalogError, DataLoader, FilterSelection,
    Item, SiteConfig, filter, load_or_default,
};

const CARS_JSON: &str = include_str!("../../flexicars-web/static/assets/data/cars.json");
const SITE_JSON: &str = include_str!("../../flexicars-web/static/assets/data/site.json");

fn catalog() -> Catalog {
    Catalog::from_json(CARS_JSON).expect("bundled catalog parses")
}

fn ids(items: &[&Item]) -> Vec<u32> {
    items.iter().map(|item| item.id).collect()
}

fn select(category: &str, brand: &str, price: &str) -> Vec<u32> {
    let catalog = catalog();
    ids(&filter(
        catalog.items(),
        &FilterSelection::from_dropdowns(category, brand, price),
    ))
}

#[test]
fn bundled_catalog_has_six_unique_listings() {
    let catalog = catalog();
    assert_eq!(catalog.len(), 6);
    assert_eq!(
        catalog.categories(),
        vec!["suv", "sedan", "luxury", "hatchback"]
    );
    assert_eq!(catalog.items()[4].price, 4000);
}

#[test]
fn sentinel_selection_returns_everything_in_order() {
    assert_eq!(
        select(ALL_CATEGORIES, ALL_BRANDS, ANY_PRICE),
        vec![1, 2, 3, 4, 5, 6]
    );
}

#[test]
fn category_brand_and_price_scenarios() {
    assert_eq!(select("suv", ALL_BRANDS, ANY_PRICE), vec![1, 3]);
    assert_eq!(select(ALL_CATEGORIES, "toyota", ANY_PRICE), vec![1]);
    assert_eq!(select(ALL_CATEGORIES, ALL_BRANDS, "4000+"), vec![5]);
    assert_eq!(select(ALL_CATEGORIES, ALL_BRANDS, "₹4000+"), vec![5]);
}

#[test]
fn price_ranges_are_inclusive() {
    let catalog = catalog();
    let between = select(ALL_CATEGORIES, ALL_BRANDS, "2000-3000");
    let expected: Vec<u32> = catalog
        .items()
        .iter()
        .filter(|car| (2000..=3000).contains(&car.price))
        .map(|car| car.id)
        .collect();
    assert_eq!(between, expected);
    assert_eq!(between, vec![2, 6]);

    assert_eq!(select(ALL_CATEGORIES, ALL_BRANDS, "3000+"), vec![4, 5]);
}

#[test]
fn no_match_is_an_empty_list() {
    assert!(select("suv", "bmw", ANY_PRICE).is_empty());
}

#[test]
fn bundled_site_config_parses() {
    let cfg = SiteConfig::from_json(SITE_JSON).expect("site config");
    assert_eq!(cfg.search_delay_ms, 2000);
    assert_eq!(cfg.toast.lifetime_ms(), 3300);
    assert!(cfg.price_ranges.iter().any(|label| label.contains("4000")));
}

struct FixtureLoader {
    catalog: &'static str,
}

impl DataLoader for FixtureLoader {
    type Error = CatalogError;

    fn load_catalog(&self) -> Result<Catalog, Self::Error> {
        Catalog::from_json(self.catalog)
    }

    fn load_site_config(&self) -> Result<SiteConfig, Self::Error> {
        Ok(SiteConfig::default())
    }
}

#[test]
fn broken_data_falls_back_to_defaults() {
    let (catalog, cfg) = load_or_default(&FixtureLoader { catalog: "{" });
    assert!(catalog.is_empty());
    assert_eq!(cfg, SiteConfig::default());

    let (catalog, _) = load_or_default(&FixtureLoader { catalog: CARS_JSON });
    assert_eq!(catalog.len(), 6);
}
