//! Facade crate for the Stayfinder search and ranking engine.
//!
//! This crate re-exports the core domain types together with the filter,
//! recommendation, comparison, and orchestration components. Consumers that
//! only need the domain model can depend on `stayfinder-core` directly.

#![forbid(unsafe_code)]

pub use stayfinder_core::{
    Amenity, AmenitySet, GeoPoint, GeoPointError, Listing, ListingCategory, ListingError,
    ListingScorer, ScoredListing, SearchError, SearchFilters, SortKey, distance_km,
};

pub use stayfinder_search::{
    ComparisonScore, ComparisonScorer, FilterPipeline, RecommendationScorer,
    RecommendationWeights, SearchOrchestrator, SearchPage,
};
