//! Car listings and the sample catalog they are loaded into.
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transmission {
    Manual,
    Auto,
}

impl Transmission {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Manual => "Manual",
            Self::Auto => "Auto",
        }
    }
}

impl fmt::Display for Transmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fuel {
    Electric,
    Petrol,
    Diesel,
    Hybrid,
}

impl Fuel {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Electric => "Electric",
            Self::Petrol => "Petrol",
            Self::Diesel => "Diesel",
            Self::Hybrid => "Hybrid",
        }
    }
}

impl fmt::Display for Fuel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fixed spec sheet shown on every card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specs {
    pub mileage: u32,
    pub transmission: Transmission,
    /// Free-form descriptor such as "7 Person".
    pub seats: String,
    pub fuel: Fuel,
}

/// A single rentable car.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    /// Daily rate in whole currency units.
    pub price: u32,
    pub rating: f32,
    pub specs: Specs,
    pub image: String,
    pub category: String,
    pub brand: String,
}

impl Item {
    /// Rating as shown on the card: whole ratings drop the fraction (`5`, `4.7`).
    #[must_use]
    pub fn rating_label(&self) -> String {
        if self.rating.fract() == 0.0 {
            format!("{:.0}", self.rating)
        } else {
            self.rating.to_string()
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Duplicate listing id {0}")]
    DuplicateId(u32),
    #[error("Listing {id} has invalid id or price")]
    InvalidPrice { id: u32 },
    #[error("Listing {id} rating {rating} is outside 0..=5")]
    InvalidRating { id: u32, rating: f32 },
}

/// Immutable list of listings held for the lifetime of the page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns an error when two items share an id, an id or price is zero, or a rating
    /// falls outside `0..=5`.
    pub fn new(items: Vec<Item>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.id == 0 || item.price == 0 {
                return Err(CatalogError::InvalidPrice { id: item.id });
            }
            if !(0.0..=5.0).contains(&item.rating) {
                return Err(CatalogError::InvalidRating {
                    id: item.id,
                    rating: item.rating,
                });
            }
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId(item.id));
            }
        }
        Ok(Self { items })
    }

    /// Parse catalog JSON of the shape `{ "items": [...] }`.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or fails [`Catalog::new`] validation.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: Self = serde_json::from_str(json)?;
        Self::new(raw.items)
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distinct categories in first-appearance order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        distinct(self.items.iter().map(|item| item.category.as_str()))
    }

    /// Distinct brands in first-appearance order.
    #[must_use]
    pub fn brands(&self) -> Vec<&str> {
        distinct(self.items.iter().map(|item| item.brand.as_str()))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut out: Vec<&str> = Vec::new();
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}

/// Alert text for the "Rent Now" action.
#[must_use]
pub fn rental_message(id: u32) -> String {
    format!(
        "Rental process started for car ID: {id}. In a real application, this would redirect to booking page."
    )
}


#[cfg(test)]
mod tests {
    use super::fixtures::item;
    use super::*;

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::new(vec![item(1, 100, "suv", "a"), item(1, 200, "suv", "b")])
            .expect_err("duplicate id");
        assert!(matches!(err, CatalogError::DuplicateId(1)));
    }

    #[test]
    fn rejects_zero_price_and_bad_rating() {
        let err = Catalog::new(vec![item(2, 0, "suv", "a")]).expect_err("zero price");
        assert!(matches!(err, CatalogError::InvalidPrice { id: 2 }));

        let mut rated = item(3, 10, "suv", "a");
        rated.rating = 5.5;
        let err = Catalog::new(vec![rated]).expect_err("rating");
        assert!(matches!(err, CatalogError::InvalidRating { id: 3, .. }));
    }

    #[test]
    fn distinct_tags_keep_first_appearance_order() {
        let catalog = Catalog::new(vec![
            item(1, 10, "suv", "toyota"),
            item(2, 10, "sedan", "nissan"),
            item(3, 10, "suv", "skoda"),
        ])
        .expect("catalog");
        assert_eq!(catalog.categories(), vec!["suv", "sedan"]);
        assert_eq!(catalog.brands(), vec!["toyota", "nissan", "skoda"]);
        assert_eq!(catalog.items()[1].brand, "nissan");
    }

    #[test]
    fn rating_label_drops_whole_fraction() {
        let mut car = item(1, 10, "suv", "a");
        car.rating = 5.0;
        assert_eq!(car.rating_label(), "5");
        car.rating = 4.7;
        assert_eq!(car.rating_label(), "4.7");
    }

    #[test]
    fn rental_message_names_the_car() {
        assert!(rental_message(4).contains("car ID: 4"));
    }
}
