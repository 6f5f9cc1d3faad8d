//! Immutable search request configuration.
//!
//! A [`SearchFilters`] value is built fresh for every search request and is
//! never mutated in place; callers construct a new value on each change and
//! pass it through the pipeline. Every field is optional and absence means
//! "no constraint".

use crate::{AmenitySet, GeoPoint, ListingCategory, SearchError};

/// Requested result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SortKey {
    /// Composite recommendation score, best first. The default.
    #[default]
    Recommended,
    /// Cheapest first.
    PriceLow,
    /// Costliest first.
    PriceHigh,
    /// Highest average rating first.
    Rating,
    /// Most recently created first.
    Newest,
    /// Closest to the origin first; listings without coordinates sort last.
    Distance,
}

impl SortKey {
    /// Return the sort key as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recommended => "recommended",
            Self::PriceLow => "price_low",
            Self::PriceHigh => "price_high",
            Self::Rating => "rating",
            Self::Newest => "newest",
            Self::Distance => "distance",
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "recommended" => Ok(Self::Recommended),
            "price_low" => Ok(Self::PriceLow),
            "price_high" => Ok(Self::PriceHigh),
            "rating" => Ok(Self::Rating),
            "newest" => Ok(Self::Newest),
            "distance" => Ok(Self::Distance),
            _ => Err(format!("unknown sort key '{s}'")),
        }
    }
}

/// Per-request filter configuration; every field optional.
///
/// Predicates combine conjunctively. The spatial predicate is active only
/// when both `origin` and `max_distance_km` are set.
///
/// # Examples
/// ```
/// use stayfinder_core::{ListingCategory, SearchFilters, SortKey};
///
/// let filters = SearchFilters {
///     category: Some(ListingCategory::Pg),
///     price_max: Some(10_000.0),
///     sort_key: SortKey::PriceLow,
///     ..SearchFilters::default()
/// };
/// assert!(filters.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchFilters {
    /// Case-insensitive substring to match against the searchable text
    /// fields.
    pub text_query: Option<String>,
    /// Exact category to match.
    pub category: Option<ListingCategory>,
    /// Inclusive lower price bound.
    pub price_min: Option<f64>,
    /// Inclusive upper price bound.
    pub price_max: Option<f64>,
    /// Inclusive lower bound on the average rating.
    pub min_rating: Option<f32>,
    /// Amenity flags the listing must offer; empty means unconstrained.
    pub amenities: AmenitySet,
    /// Exact availability to match; `None` passes both states.
    pub available: Option<bool>,
    /// Search origin for distance computation and the spatial predicate.
    pub origin: Option<GeoPoint>,
    /// Maximum distance from `origin` in kilometres.
    pub max_distance_km: Option<f64>,
    /// Requested result ordering.
    pub sort_key: SortKey,
}

impl SearchFilters {
    /// Reject non-finite numeric bounds.
    ///
    /// An inverted price range (`price_min > price_max`) is deliberately not
    /// an error: it matches nothing, and an empty result is a normal
    /// outcome.
    ///
    /// # Errors
    /// Returns [`SearchError::NonFiniteFilter`] naming the offending field.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.price_min.is_some_and(|v| !v.is_finite()) {
            return Err(SearchError::NonFiniteFilter { field: "price_min" });
        }
        if self.price_max.is_some_and(|v| !v.is_finite()) {
            return Err(SearchError::NonFiniteFilter { field: "price_max" });
        }
        if self.min_rating.is_some_and(|v| !v.is_finite()) {
            return Err(SearchError::NonFiniteFilter { field: "min_rating" });
        }
        if self.max_distance_km.is_some_and(|v| !v.is_finite()) {
            return Err(SearchError::NonFiniteFilter {
                field: "max_distance_km",
            });
        }
        Ok(())
    }
}
