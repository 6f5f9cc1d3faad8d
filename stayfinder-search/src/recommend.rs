//! Absolute recommendation scoring.
//!
//! Combines normalised per-listing signals into a single 0–100 score using
//! fixed weights. This is a deterministic, explainable formula, not a model:
//! the same inputs always yield the same score, and unit tests assert exact
//! values.

use stayfinder_core::{GeoPoint, Listing, ListingScorer, distance_km};

/// Distance at which the proximity term decays to zero, in kilometres.
const PROXIMITY_DECAY_KM: f64 = 5.0;

/// Review count at which the popularity term saturates.
const POPULARITY_SATURATION: f32 = 100.0;

/// Tunable weights applied to the recommendation signals.
///
/// The defaults sum to 100 so the composite score spans `0.0..=100.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecommendationWeights {
    /// Weight of the average-rating (quality) term.
    pub quality: f32,
    /// Weight of the hygiene/trust term.
    pub trust: f32,
    /// Weight of the proximity term.
    pub proximity: f32,
    /// Weight of the review-count (popularity) term.
    pub popularity: f32,
}

impl Default for RecommendationWeights {
    fn default() -> Self {
        Self {
            quality: 40.0,
            trust: 30.0,
            proximity: 20.0,
            popularity: 10.0,
        }
    }
}

/// Absolute 0–100 scorer over fixed-threshold normalised signals.
///
/// Term by term, with the default weights:
/// - quality 40: `average_rating / 5 * 40`;
/// - trust 30: `hygiene_rating / 5 * 30`, contributing `0` when the listing
///   carries no hygiene rating;
/// - proximity 20: linear decay from full credit at 0 km to zero at 5 km,
///   contributing `0` when either the origin or the listing position is
///   absent; a missing coordinate is neutral, never penalised;
/// - popularity 10: review count saturating at 100 reviews.
///
/// Normalisation here is absolute: a listing's score does not depend on
/// which other listings are in the catalog. The set-relative policy lives in
/// [`ComparisonScorer`](crate::ComparisonScorer) and the two are deliberately
/// separate strategies.
///
/// # Examples
/// ```
/// use chrono::Utc;
/// use stayfinder_core::{Listing, ListingCategory, ListingScorer};
/// use stayfinder_search::RecommendationScorer;
///
/// let listing = Listing::new(1, ListingCategory::Pg, 8_000.0, Utc::now())
///     .unwrap()
///     .with_rating(4.0)
///     .unwrap();
/// let scorer = RecommendationScorer::default();
/// assert_eq!(scorer.score(&listing, None), 32.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationScorer {
    weights: RecommendationWeights,
}

impl RecommendationScorer {
    /// Construct a scorer with custom weights.
    #[must_use]
    pub const fn new(weights: RecommendationWeights) -> Self {
        Self { weights }
    }

    /// The weights in effect.
    #[must_use]
    pub const fn weights(&self) -> RecommendationWeights {
        self.weights
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "weighted signal composition is floating-point by nature"
    )]
    fn quality_term(&self, listing: &Listing) -> f32 {
        listing.average_rating.clamp(0.0, 5.0) / 5.0 * self.weights.quality
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "weighted signal composition is floating-point by nature"
    )]
    fn trust_term(&self, listing: &Listing) -> f32 {
        listing
            .hygiene_rating
            .map_or(0.0, |hygiene| hygiene.clamp(0.0, 5.0) / 5.0 * self.weights.trust)
    }

    #[expect(
        clippy::float_arithmetic,
        clippy::cast_possible_truncation,
        reason = "distance decay is floating-point; the ratio is clamped into f32 range"
    )]
    fn proximity_term(&self, listing: &Listing, origin: Option<&GeoPoint>) -> f32 {
        let (Some(origin), Some(location)) = (origin, listing.location) else {
            return 0.0;
        };
        let d = distance_km(*origin, location);
        let decay = ((PROXIMITY_DECAY_KM - d) / PROXIMITY_DECAY_KM).max(0.0);
        decay as f32 * self.weights.proximity
    }

    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "review counts far exceed f32 precision only past the saturation point"
    )]
    fn popularity_term(&self, listing: &Listing) -> f32 {
        (listing.review_count as f32 / POPULARITY_SATURATION).min(1.0) * self.weights.popularity
    }
}

impl ListingScorer for RecommendationScorer {
    #[expect(
        clippy::float_arithmetic,
        reason = "the composite score sums the weighted terms"
    )]
    fn score(&self, listing: &Listing, origin: Option<&GeoPoint>) -> f32 {
        let raw = self.quality_term(listing)
            + self.trust_term(listing)
            + self.proximity_term(listing, origin)
            + self.popularity_term(listing);
        Self::sanitise(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rstest::{fixture, rstest};
    use stayfinder_core::ListingCategory;

    fn listing(price: f64) -> Listing {
        Listing::new(1, ListingCategory::Pg, price, Utc::now()).unwrap()
    }

    #[fixture]
    fn scorer() -> RecommendationScorer {
        RecommendationScorer::default()
    }

    #[rstest]
    fn price_is_not_a_scoring_input(scorer: RecommendationScorer) {
        let cheap = listing(5_000.0).with_rating(4.0).unwrap();
        let costly = listing(15_000.0).with_rating(4.0).unwrap();
        assert_eq!(scorer.score(&cheap, None), 32.0);
        assert_eq!(scorer.score(&costly, None), 32.0);
    }

    #[rstest]
    fn absent_hygiene_rating_contributes_nothing(scorer: RecommendationScorer) {
        let without = listing(6_000.0).with_rating(5.0).unwrap();
        let with = listing(6_000.0)
            .with_rating(5.0)
            .unwrap()
            .with_hygiene_rating(5.0)
            .unwrap();
        assert_eq!(scorer.score(&without, None), 40.0);
        assert_eq!(scorer.score(&with, None), 70.0);
    }

    #[rstest]
    fn proximity_gives_full_credit_at_origin(scorer: RecommendationScorer) {
        let origin = GeoPoint::new(12.9716, 77.5946).unwrap();
        let l = listing(6_000.0).with_location(origin);
        assert_eq!(scorer.score(&l, Some(&origin)), 20.0);
    }

    #[rstest]
    fn proximity_decays_to_zero_at_five_km(scorer: RecommendationScorer) {
        let origin = GeoPoint::new(12.9716, 77.5946).unwrap();
        // Roughly 11 km north of the origin.
        let far = listing(6_000.0).with_location(GeoPoint::new(13.0716, 77.5946).unwrap());
        assert_eq!(scorer.score(&far, Some(&origin)), 0.0);
    }

    #[rstest]
    fn missing_coordinates_are_neutral_for_proximity(scorer: RecommendationScorer) {
        let origin = GeoPoint::new(12.9716, 77.5946).unwrap();
        let untagged = listing(6_000.0).with_rating(4.0).unwrap();
        assert_eq!(scorer.score(&untagged, Some(&origin)), 32.0);
        assert_eq!(scorer.score(&untagged, None), 32.0);
    }

    #[rstest]
    #[case(0, 0.0)]
    #[case(50, 5.0)]
    #[case(100, 10.0)]
    #[case(1_000, 10.0)]
    fn popularity_saturates_at_one_hundred_reviews(
        scorer: RecommendationScorer,
        #[case] reviews: u32,
        #[case] expected: f32,
    ) {
        let l = listing(6_000.0).with_reviews(reviews);
        assert!((scorer.score(&l, None) - expected).abs() < 1e-5);
    }

    #[rstest]
    fn perfect_listing_scores_one_hundred(scorer: RecommendationScorer) {
        let origin = GeoPoint::new(12.9716, 77.5946).unwrap();
        let l = listing(6_000.0)
            .with_rating(5.0)
            .unwrap()
            .with_hygiene_rating(5.0)
            .unwrap()
            .with_reviews(250)
            .with_location(origin);
        assert_eq!(scorer.score(&l, Some(&origin)), 100.0);
    }

    #[rstest]
    fn custom_weights_rescale_terms() {
        let weights = RecommendationWeights {
            quality: 100.0,
            trust: 0.0,
            proximity: 0.0,
            popularity: 0.0,
        };
        let scorer = RecommendationScorer::new(weights);
        let l = listing(6_000.0).with_rating(2.5).unwrap();
        assert_eq!(scorer.score(&l, None), 50.0);
    }
}
