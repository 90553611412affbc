//! Category, brand and price filtering over the catalog.
use crate::listing::{Catalog, Item};
use std::rc::Rc;

pub const ALL_CATEGORIES: &str = "All Categories";
pub const ALL_BRANDS: &str = "All Brands";
pub const ANY_PRICE: &str = "Price Range";

/// A tag dropdown selection: either the sentinel or one exact tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Any,
    Only(String),
}

impl Selection {
    /// Interpret a raw dropdown value; the sentinel and the empty string mean no constraint.
    #[must_use]
    pub fn from_dropdown(value: &str, sentinel: &str) -> Self {
        if value.is_empty() || value == sentinel {
            Self::Any
        } else {
            Self::Only(value.to_string())
        }
    }

    #[must_use]
    pub fn matches(&self, tag: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Only(wanted) => wanted == tag,
        }
    }
}

/// Daily price bounds parsed from a dropdown label such as `"₹2000 - ₹3000"` or `"₹3000+"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriceRange {
    #[default]
    Any,
    /// Inclusive on both ends.
    Between { min: u32, max: u32 },
    AtLeast(u32),
}

impl PriceRange {
    /// Parse `"<min>-<max>"` or `"<min>+"`, keeping only the digits of each bound.
    ///
    /// Labels without any digits are no constraint. A label with only an upper bound
    /// is read as `0..=max`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw == ANY_PRICE {
            return Self::Any;
        }
        let mut parts = raw.split('-');
        let min = parts.next().and_then(digits_of);
        let max = parts.next().and_then(digits_of);
        match (min, max) {
            (min, Some(max)) => Self::Between {
                min: min.unwrap_or(0),
                max,
            },
            (Some(min), None) => Self::AtLeast(min),
            (None, None) => Self::Any,
        }
    }

    #[must_use]
    pub const fn matches(self, price: u32) -> bool {
        match self {
            Self::Any => true,
            Self::Between { min, max } => price >= min && price <= max,
            Self::AtLeast(min) => price >= min,
        }
    }
}

fn digits_of(part: &str) -> Option<u32> {
    let digits: String = part.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}

/// The three dropdowns of the filter bar, already interpreted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub category: Selection,
    pub brand: Selection,
    pub price: PriceRange,
}

impl FilterSelection {
    #[must_use]
    pub fn from_dropdowns(category: &str, brand: &str, price: &str) -> Self {
        Self {
            category: Selection::from_dropdown(category, ALL_CATEGORIES),
            brand: Selection::from_dropdown(brand, ALL_BRANDS),
            price: PriceRange::parse(price),
        }
    }

    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self == &Self::default()
    }

    #[must_use]
    pub fn matches(&self, item: &Item) -> bool {
        self.category.matches(&item.category)
            && self.brand.matches(&item.brand)
            && self.price.matches(item.price)
    }
}

/// Items satisfying every predicate, in source order.
#[must_use]
pub fn filter<'a>(items: &'a [Item], selection: &FilterSelection) -> Vec<&'a Item> {
    items.iter().filter(|item| selection.matches(item)).collect()
}

/// Application state for the listing page: the catalog plus the applied filters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Showroom {
    catalog: Rc<Catalog>,
    selection: FilterSelection,
}

impl Showroom {
    #[must_use]
    pub fn new(catalog: Rc<Catalog>) -> Self {
        Self {
            catalog,
            selection: FilterSelection::default(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// Copy of this showroom with a new selection applied; the catalog is shared.
    #[must_use]
    pub fn with_selection(&self, selection: FilterSelection) -> Self {
        Self {
            catalog: Rc::clone(&self.catalog),
            selection,
        }
    }

    #[must_use]
    pub fn visible(&self) -> Vec<&Item> {
        filter(self.catalog.items(), &self.selection)
    }
}
