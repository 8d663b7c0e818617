//! Menu search and ordering.

use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Product;

/// Menu ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MenuSort {
    /// Cheapest first.
    PriceAsc,
    /// Most expensive first.
    PriceDesc,
    /// Highest total review score first.
    #[default]
    Rating,
}

impl MenuSort {
    /// The wire name (`price-asc`, `price-desc`, `rating`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::Rating => "rating",
        }
    }
}

impl fmt::Display for MenuSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MenuSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price-asc" => Ok(Self::PriceAsc),
            "price-desc" => Ok(Self::PriceDesc),
            "rating" => Ok(Self::Rating),
            other => Err(format!(
                "unknown sort {other:?} (expected price-asc, price-desc or rating)"
            )),
        }
    }
}

/// What the menu page is currently showing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuQuery {
    /// Case-insensitive text matched against name and description. Empty
    /// matches everything.
    pub search: String,
    /// Display order.
    pub sort: MenuSort,
}

impl MenuQuery {
    /// Query with a search term and the default ordering.
    #[must_use]
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: term.into(),
            sort: MenuSort::default(),
        }
    }

    /// Replace the ordering.
    #[must_use]
    pub fn sorted_by(mut self, sort: MenuSort) -> Self {
        self.sort = sort;
        self
    }

    fn matches(&self, product: &Product) -> bool {
        let needle = self.search.to_lowercase();
        product.name.to_lowercase().contains(&needle)
            || product.description.to_lowercase().contains(&needle)
    }
}

/// Products matching `query`, in display order.
///
/// Ties keep catalog order. [`MenuSort::Rating`] ranks by the sum of review
/// ratings, not the average.
#[must_use]
pub fn filter_and_sort<'a>(products: &'a [Product], query: &MenuQuery) -> Vec<&'a Product> {
    let mut shown: Vec<&Product> = products.iter().filter(|p| query.matches(p)).collect();

    match query.sort {
        MenuSort::PriceAsc => shown.sort_by_key(|p| p.price),
        MenuSort::PriceDesc => shown.sort_by_key(|p| Reverse(p.price)),
        MenuSort::Rating => shown.sort_by_key(|p| Reverse(p.rating_sum())),
    }

    shown
}
