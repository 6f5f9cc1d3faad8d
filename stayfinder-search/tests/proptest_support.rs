//! Proptest strategies for the search engine property-based tests.
//!
//! The strategies generate valid domain values only: coordinates inside the
//! WGS84 ranges, finite non-negative prices, ratings on the five-point
//! scale. Invalid input is covered by the boundary-validation unit tests,
//! not by the property suites.

use chrono::{DateTime, Utc};
use proptest::prelude::*;
use stayfinder_core::{Amenity, AmenitySet, GeoPoint, Listing, ListingCategory};

/// Strategy for a valid [`GeoPoint`] anywhere on the globe.
pub fn geo_point_strategy() -> impl Strategy<Value = GeoPoint> {
    (-90.0_f64..=90.0_f64, -180.0_f64..=180.0_f64).prop_map(|(lat, lon)| {
        GeoPoint::new(lat, lon).expect("strategy stays inside the valid ranges")
    })
}

/// Strategy for a creation timestamp within a plausible catalog lifetime.
fn created_at_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (1_500_000_000_i64..1_700_000_000_i64).prop_map(|secs| {
        DateTime::from_timestamp(secs, 0).expect("strategy stays inside the representable range")
    })
}

/// Strategy for a single valid listing with optional coordinates.
pub fn listing_strategy() -> impl Strategy<Value = Listing> {
    let category = prop_oneof![
        Just(ListingCategory::Pg),
        Just(ListingCategory::Flat),
        Just(ListingCategory::Hostel),
        Just(ListingCategory::Room),
        Just(ListingCategory::VegMess),
    ];
    (
        category,
        0.0_f64..50_000.0_f64,
        created_at_strategy(),
        0.0_f32..=5.0_f32,
        proptest::option::of(0.0_f32..=5.0_f32),
        0_u32..500_u32,
        proptest::option::of(geo_point_strategy()),
        proptest::sample::subsequence(Amenity::ALL.to_vec(), 0..=Amenity::ALL.len()),
        any::<bool>(),
    )
        .prop_map(
            |(category, price, created_at, rating, hygiene, reviews, location, flags, available)| {
                let mut listing = Listing::new(0, category, price, created_at)
                    .expect("strategy prices are finite and non-negative")
                    .with_rating(rating)
                    .expect("strategy ratings are finite")
                    .with_reviews(reviews)
                    .with_amenities(flags.into_iter().collect::<AmenitySet>())
                    .with_availability(available);
                if let Some(hygiene) = hygiene {
                    listing = listing
                        .with_hygiene_rating(hygiene)
                        .expect("strategy ratings are finite");
                }
                if let Some(location) = location {
                    listing = listing.with_location(location);
                }
                listing
            },
        )
}

/// Strategy for a catalog of listings with unique, position-derived IDs.
pub fn catalog_strategy(max_len: usize) -> impl Strategy<Value = Vec<Listing>> {
    proptest::collection::vec(listing_strategy(), 0..=max_len).prop_map(|listings| {
        listings
            .into_iter()
            .enumerate()
            .map(|(idx, mut listing)| {
                listing.id = (idx as u64) + 1;
                listing
            })
            .collect()
    })
}
