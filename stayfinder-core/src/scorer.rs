//! Score listings for a search request.
//!
//! The `ListingScorer` trait assigns an absolute 0–100 score to a
//! [`Listing`](crate::Listing) given an optional search origin. Comparison
//! scoring is deliberately a separate, set-relative strategy and does not
//! implement this trait; the two normalisation policies must stay
//! independently testable.

use crate::{GeoPoint, Listing};

/// Calculate an absolute relevance score for a listing.
///
/// Higher scores indicate a stronger recommendation. Implementations must be
/// thread-safe (`Send` + `Sync`) so scoring can run across threads, and must
/// be deterministic: identical inputs always yield an identical score.
///
/// Implementations must:
/// - Produce finite (`f32::is_finite`) scores.
/// - Normalise results to the range `0.0..=100.0`.
///
/// Use [`ListingScorer::sanitise`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use chrono::Utc;
/// use stayfinder_core::{GeoPoint, Listing, ListingCategory, ListingScorer};
///
/// struct FlatScorer;
///
/// impl ListingScorer for FlatScorer {
///     fn score(&self, _listing: &Listing, _origin: Option<&GeoPoint>) -> f32 {
///         50.0
///     }
/// }
///
/// let listing = Listing::new(1, ListingCategory::Pg, 8_000.0, Utc::now()).unwrap();
/// assert_eq!(FlatScorer.score(&listing, None), 50.0);
/// ```
pub trait ListingScorer: Send + Sync {
    /// Return a score for `listing`, using `origin` for proximity signals
    /// when both sides are geo-tagged.
    fn score(&self, listing: &Listing, origin: Option<&GeoPoint>) -> f32;

    /// Clamp and validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=100.0`.
    #[must_use]
    fn sanitise(score: f32) -> f32
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return 0.0;
        }
        score.clamp(0.0, 100.0)
    }
}
