//! Set-relative comparison scoring.
//!
//! Calibrates each axis against the small, user-curated comparison set
//! itself rather than the whole catalog. This is the key difference from
//! [`RecommendationScorer`](crate::RecommendationScorer): a listing's
//! comparison axes change when the set changes, and a lone candidate cannot
//! be worse than itself.

use stayfinder_core::{Amenity, Listing, SearchError};

/// Review count at which the location proxy saturates.
const LOCATION_SATURATION: f64 = 50.0;

/// Per-axis comparison result for one listing, all axes in `0..=100`.
///
/// Derived purely from the current comparison set; recomputed whenever the
/// set changes and discarded otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonScore {
    /// Identifier of the scored listing.
    pub listing_id: u64,
    /// Lower price scores higher, relative to the set's price spread.
    pub price_score: u8,
    /// Average rating against the 0–5 scale.
    pub rating_score: u8,
    /// Share of tracked amenity flags the listing offers.
    pub amenities_score: u8,
    /// Review-density stand-in for locational desirability.
    pub location_score: u8,
    /// Unweighted mean of the four axes.
    pub total_score: u8,
}

/// Computes [`ComparisonScore`] values for a user-selected listing set.
///
/// # Examples
/// ```
/// use chrono::Utc;
/// use stayfinder_core::{Listing, ListingCategory};
/// use stayfinder_search::ComparisonScorer;
///
/// # fn main() -> Result<(), stayfinder_core::SearchError> {
/// let set = vec![
///     Listing::new(1, ListingCategory::Pg, 5_000.0, Utc::now()).unwrap(),
///     Listing::new(2, ListingCategory::Pg, 15_000.0, Utc::now()).unwrap(),
/// ];
/// let scores = ComparisonScorer::compare(&set)?;
/// assert_eq!(scores[0].price_score, 100);
/// assert_eq!(scores[1].price_score, 0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ComparisonScorer;

impl ComparisonScorer {
    /// Score every listing in `set` relative to the set itself.
    ///
    /// Results are returned in input order.
    ///
    /// # Errors
    /// Returns [`SearchError::EmptyComparisonSet`] for an empty set; a
    /// comparison over nothing has no meaningful axes.
    pub fn compare(set: &[Listing]) -> Result<Vec<ComparisonScore>, SearchError> {
        if set.is_empty() {
            return Err(SearchError::EmptyComparisonSet);
        }
        let min_price = set.iter().map(|l| l.price).fold(f64::INFINITY, f64::min);
        let max_price = set
            .iter()
            .map(|l| l.price)
            .fold(f64::NEG_INFINITY, f64::max);

        Ok(set
            .iter()
            .map(|listing| Self::score_one(listing, min_price, max_price))
            .collect())
    }

    fn score_one(listing: &Listing, min_price: f64, max_price: f64) -> ComparisonScore {
        let price_score = price_axis(listing.price, min_price, max_price);
        let rating_score = rating_axis(listing.average_rating);
        let amenities_score = amenities_axis(listing.amenities.len());
        let location_score = location_axis(listing.review_count);
        ComparisonScore {
            listing_id: listing.id,
            price_score,
            rating_score,
            amenities_score,
            location_score,
            total_score: mean_axis([price_score, rating_score, amenities_score, location_score]),
        }
    }
}

/// Clamp a raw axis value into `0..=100` and round to the nearest integer.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the value is clamped into 0..=100 before the cast"
)]
fn to_axis(value: f64) -> u8 {
    value.clamp(0.0, 100.0).round() as u8
}

/// Relative price axis: `100` for the cheapest listing, `0` for the
/// costliest. A set with no price spread degenerates to `100` for everyone.
#[expect(
    clippy::float_arithmetic,
    reason = "axis normalisation is floating-point"
)]
fn price_axis(price: f64, min_price: f64, max_price: f64) -> u8 {
    let spread = max_price - min_price;
    if spread == 0.0 {
        return 100;
    }
    to_axis(100.0 * (max_price - price) / spread)
}

#[expect(
    clippy::float_arithmetic,
    reason = "axis normalisation is floating-point"
)]
fn rating_axis(average_rating: f32) -> u8 {
    to_axis(f64::from(average_rating) / 5.0 * 100.0)
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "the tracked amenity set is far smaller than f64 precision"
)]
fn amenities_axis(flags_set: usize) -> u8 {
    to_axis(100.0 * flags_set as f64 / Amenity::ALL.len() as f64)
}

/// Review-density proxy for locational desirability.
///
/// There is no genuine location-quality signal in the source data, so this
/// axis saturates review count at 50 reviews. A placeholder;
/// replacing it with a real desirability signal changes observable ranking.
#[expect(
    clippy::float_arithmetic,
    reason = "axis normalisation is floating-point"
)]
fn location_axis(review_count: u32) -> u8 {
    to_axis((f64::from(review_count) / LOCATION_SATURATION).min(1.0) * 100.0)
}

#[expect(
    clippy::float_arithmetic,
    reason = "the aggregate is the rounded mean of the axes"
)]
fn mean_axis(axes: [u8; 4]) -> u8 {
    let sum: u16 = axes.iter().copied().map(u16::from).sum();
    to_axis(f64::from(sum) / 4.0)
}
