use super::{Check, ScenarioContext};
use anyhow::{Result, ensure};
use flexicars_core::{
    ALL_BRANDS, ALL_CATEGORIES, ANY_PRICE, FilterSelection, PriceRange, Showroom,
};
use std::rc::Rc;

fn visible_ids(showroom: &Showroom, category: &str, brand: &str, price: &str) -> Vec<u32> {
    showroom
        .with_selection(FilterSelection::from_dropdowns(category, brand, price))
        .visible()
        .iter()
        .map(|item| item.id)
        .collect()
}

fn expect_ids(
    showroom: &Showroom,
    (category, brand, price): (&str, &str, &str),
    expected: &[u32],
) -> Result<()> {
    let ids = visible_ids(showroom, category, brand, price);
    ensure!(
        ids == expected,
        "{category} / {brand} / {price}: expected {expected:?}, got {ids:?}"
    );
    Ok(())
}

fn selection_leaves_catalog_alone(showroom: &Showroom) -> Result<()> {
    let narrowed =
        showroom.with_selection(FilterSelection::from_dropdowns("luxury", "bmw", "₹4000+"));
    ensure!(narrowed.visible().len() == 1, "expected one luxury bmw");
    ensure!(
        showroom.visible().len() == showroom.catalog().len(),
        "original showroom lost listings"
    );
    ensure!(
        narrowed.catalog() == showroom.catalog(),
        "filtering changed the catalog"
    );
    Ok(())
}

fn configured_ranges_constrain(ctx: &ScenarioContext) -> Result<()> {
    for label in &ctx.config.price_ranges {
        ensure!(
            PriceRange::parse(label) != PriceRange::Any,
            "price label {label:?} imposes no constraint"
        );
    }
    Ok(())
}

pub fn checks(ctx: &ScenarioContext) -> Vec<Check> {
    let showroom = Showroom::new(Rc::new(ctx.catalog.clone()));
    let every: Vec<u32> = ctx.catalog.items().iter().map(|item| item.id).collect();
    vec![
        Check::new(
            "sentinels show every listing",
            expect_ids(&showroom, (ALL_CATEGORIES, ALL_BRANDS, ANY_PRICE), &every),
        ),
        Check::new(
            "category narrows",
            expect_ids(&showroom, ("suv", ALL_BRANDS, ANY_PRICE), &[1, 3]),
        ),
        Check::new(
            "brand narrows",
            expect_ids(&showroom, (ALL_CATEGORIES, "toyota", ANY_PRICE), &[1]),
        ),
        Check::new(
            "closed range is inclusive",
            expect_ids(&showroom, (ALL_CATEGORIES, ALL_BRANDS, "₹1000 - ₹1800"), &[1, 3]),
        ),
        Check::new(
            "mid range",
            expect_ids(&showroom, (ALL_CATEGORIES, ALL_BRANDS, "₹2000 - ₹3000"), &[2, 6]),
        ),
        Check::new(
            "open range includes its floor",
            expect_ids(&showroom, (ALL_CATEGORIES, ALL_BRANDS, "₹4000+"), &[5]),
        ),
        Check::new(
            "constraints combine",
            expect_ids(&showroom, ("luxury", ALL_BRANDS, "₹3000+"), &[4, 5]),
        ),
        Check::new(
            "no match leaves the grid empty",
            expect_ids(&showroom, ("suv", "bmw", ANY_PRICE), &[]),
        ),
        Check::new(
            "label without digits is ignored",
            expect_ids(&showroom, (ALL_CATEGORIES, ALL_BRANDS, "cheap"), &every),
        ),
        Check::new("filtering is a view", selection_leaves_catalog_alone(&showroom)),
        Check::new("configured price ranges parse", configured_ranges_constrain(ctx)),
    ]
}
