//! Core domain types for the Stayfinder engine.
//!
//! The crate models geo-taggable catalog listings (rentable rooms and
//! meal-service facilities), the immutable filter configuration a search
//! request carries, and the scorer trait seam the ranking components plug
//! into. Constructors validate their input and return `Result` so malformed
//! values are rejected at the boundary instead of poisoning scoring math
//! downstream.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod amenity;
mod category;
mod error;
mod filters;
mod listing;
mod location;
mod scorer;

pub use amenity::{Amenity, AmenitySet};
pub use category::ListingCategory;
pub use error::SearchError;
pub use filters::{SearchFilters, SortKey};
pub use listing::{Listing, ListingError, ScoredListing};
pub use location::{EARTH_RADIUS_KM, GeoPoint, GeoPointError, distance_km};
pub use scorer::ListingScorer;
