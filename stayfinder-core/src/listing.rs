//! Catalog listings and their validating constructors.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::{AmenitySet, GeoPoint, ListingCategory};

/// A geo-taggable catalog entry: a rentable property or a mess facility.
///
/// Fields are public for ergonomic construction in collaborating layers; the
/// constructor and `with_*` builders validate the numeric invariants so
/// malformed values never enter the scoring math.
///
/// # Examples
/// ```
/// use chrono::Utc;
/// use stayfinder_core::{Listing, ListingCategory};
///
/// # fn main() -> Result<(), stayfinder_core::ListingError> {
/// let listing = Listing::new(1, ListingCategory::Pg, 7500.0, Utc::now())?
///     .with_name("Sunrise PG")
///     .with_rating(4.2)?;
/// assert_eq!(listing.average_rating, 4.2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Listing {
    /// Opaque unique identifier.
    pub id: u64,
    /// Display name or title.
    pub name: String,
    /// Neighbourhood or locality.
    pub locality: String,
    /// City.
    pub city: String,
    /// Street address.
    pub address: String,
    /// Free-text description.
    pub description: String,
    /// Accommodation or meal-service category.
    pub category: ListingCategory,
    /// Monthly-equivalent price; finite and non-negative.
    pub price: f64,
    /// Geographic position, absent when the listing is not geo-tagged.
    pub location: Option<GeoPoint>,
    /// Average review rating in `0.0..=5.0`; `0.0` when unreviewed.
    pub average_rating: f32,
    /// Hygiene/trust rating in `0.0..=5.0`, when assessed.
    pub hygiene_rating: Option<f32>,
    /// Number of reviews, used as a popularity proxy.
    pub review_count: u32,
    /// Capability flags offered.
    pub amenities: AmenitySet,
    /// Whether the listing currently accepts bookings. Unavailable listings
    /// stay visible in results unless an availability filter is set.
    pub available: bool,
    /// Creation time; tie-break and "newest" ordering key.
    pub created_at: DateTime<Utc>,
}

/// Errors returned by [`Listing::new`] and the validating builders.
#[derive(Debug, Error, PartialEq)]
pub enum ListingError {
    /// Price was negative, `NaN`, or infinite.
    #[error("listing price must be finite and non-negative, got {price}")]
    InvalidPrice {
        /// The rejected price.
        price: f64,
    },
    /// A rating was `NaN` or infinite.
    #[error("listing rating must be finite")]
    NonFiniteRating,
}

impl Listing {
    /// Validates and constructs a [`Listing`] with empty text fields, no
    /// location, no reviews, and `available = true`.
    ///
    /// # Errors
    /// Returns [`ListingError::InvalidPrice`] when `price` is negative or
    /// non-finite.
    pub fn new(
        id: u64,
        category: ListingCategory,
        price: f64,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ListingError> {
        if !price.is_finite() || price < 0.0 {
            return Err(ListingError::InvalidPrice { price });
        }
        Ok(Self {
            id,
            name: String::new(),
            locality: String::new(),
            city: String::new(),
            address: String::new(),
            description: String::new(),
            category,
            price,
            location: None,
            average_rating: 0.0,
            hygiene_rating: None,
            review_count: 0,
            amenities: AmenitySet::new(),
            available: true,
            created_at,
        })
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the locality.
    #[must_use]
    pub fn with_locality(mut self, locality: impl Into<String>) -> Self {
        self.locality = locality.into();
        self
    }

    /// Set the city.
    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    /// Set the street address.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Attach a geographic position.
    #[must_use]
    pub fn with_location(mut self, location: GeoPoint) -> Self {
        self.location = Some(location);
        self
    }

    /// Set the average review rating.
    ///
    /// Values outside `0.0..=5.0` are clamped into range.
    ///
    /// # Errors
    /// Returns [`ListingError::NonFiniteRating`] for `NaN` or infinite input.
    pub fn with_rating(mut self, rating: f32) -> Result<Self, ListingError> {
        if !rating.is_finite() {
            return Err(ListingError::NonFiniteRating);
        }
        self.average_rating = rating.clamp(0.0, 5.0);
        Ok(self)
    }

    /// Set the hygiene/trust rating.
    ///
    /// Values outside `0.0..=5.0` are clamped into range.
    ///
    /// # Errors
    /// Returns [`ListingError::NonFiniteRating`] for `NaN` or infinite input.
    pub fn with_hygiene_rating(mut self, rating: f32) -> Result<Self, ListingError> {
        if !rating.is_finite() {
            return Err(ListingError::NonFiniteRating);
        }
        self.hygiene_rating = Some(rating.clamp(0.0, 5.0));
        Ok(self)
    }

    /// Set the review count.
    #[must_use]
    pub fn with_reviews(mut self, review_count: u32) -> Self {
        self.review_count = review_count;
        self
    }

    /// Set the offered amenity flags.
    #[must_use]
    pub fn with_amenities(mut self, amenities: AmenitySet) -> Self {
        self.amenities = amenities;
        self
    }

    /// Set the availability flag.
    #[must_use]
    pub fn with_availability(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    /// Report whether any searchable text field contains `query`,
    /// case-insensitively.
    ///
    /// The searchable fields are name, locality, city, address, and
    /// description.
    #[must_use]
    pub fn matches_text(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        [
            &self.name,
            &self.locality,
            &self.city,
            &self.address,
            &self.description,
        ]
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// A listing annotated with its search score and distance from the origin.
///
/// Derived and ephemeral: recomputed on every search, never persisted.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredListing {
    /// The underlying listing.
    pub listing: Listing,
    /// Recommendation score in `0.0..=100.0`.
    pub score: f32,
    /// Distance from the search origin, when both sides are geo-tagged.
    pub distance_km: Option<f64>,
}
