//! Search orchestration: filter, score, sort, paginate.

use std::cmp::Ordering;

use log::debug;
use stayfinder_core::{
    GeoPoint, Listing, ListingScorer, ScoredListing, SearchError, SearchFilters, SortKey,
    distance_km,
};

use crate::{FilterPipeline, RecommendationScorer};

/// One page of scored search results.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchPage {
    /// The listings on this page, in result order.
    pub items: Vec<ScoredListing>,
    /// The 1-based page number that was requested.
    pub page: usize,
}

/// The single entry point the presentation layer consumes.
///
/// Composes [`FilterPipeline`], the configured [`ListingScorer`], the sort
/// policy of the request's [`SortKey`], and a 1-based pagination slice.
/// Stateless and pure: identical `(catalog, filters, page, page_size)` always
/// yields an identical page.
///
/// # Examples
/// ```
/// use chrono::Utc;
/// use stayfinder_core::{Listing, ListingCategory, SearchFilters};
/// use stayfinder_search::SearchOrchestrator;
///
/// # fn main() -> Result<(), stayfinder_core::SearchError> {
/// let catalog = vec![
///     Listing::new(1, ListingCategory::Pg, 6_000.0, Utc::now()).unwrap(),
/// ];
/// let orchestrator: SearchOrchestrator = SearchOrchestrator::default();
/// let page = orchestrator.search(&catalog, &SearchFilters::default(), 1, 20)?;
/// assert_eq!(page.items.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchOrchestrator<S = RecommendationScorer> {
    scorer: S,
}

impl<S: ListingScorer> SearchOrchestrator<S> {
    /// Construct an orchestrator around a scorer.
    pub const fn new(scorer: S) -> Self {
        Self { scorer }
    }

    /// Run a search request over a catalog snapshot.
    ///
    /// Pages are 1-based; a page past the end of the data returns empty
    /// `items`, never an error.
    ///
    /// # Errors
    /// Returns [`SearchError::InvalidPage`] or
    /// [`SearchError::InvalidPageSize`] when either argument is zero (the
    /// documented policy is to reject rather than clamp), and propagates
    /// filter validation failures.
    pub fn search(
        &self,
        catalog: &[Listing],
        filters: &SearchFilters,
        page: usize,
        page_size: usize,
    ) -> Result<SearchPage, SearchError> {
        if page == 0 {
            return Err(SearchError::InvalidPage { page });
        }
        if page_size == 0 {
            return Err(SearchError::InvalidPageSize { page_size });
        }

        let survivors = FilterPipeline::apply(catalog, filters)?;
        let mut scored: Vec<ScoredListing> = survivors
            .into_iter()
            .map(|listing| self.annotate(listing, filters.origin.as_ref()))
            .collect();
        sort_results(&mut scored, filters.sort_key);
        debug!(
            "search matched {} listings, serving page {page} (size {page_size}) sorted by {}",
            scored.len(),
            filters.sort_key
        );

        let start = page.saturating_sub(1).saturating_mul(page_size);
        let items: Vec<ScoredListing> = scored.into_iter().skip(start).take(page_size).collect();
        Ok(SearchPage { items, page })
    }

    /// Attach score and distance to one surviving listing.
    fn annotate(&self, listing: Listing, origin: Option<&GeoPoint>) -> ScoredListing {
        let distance = match (origin, listing.location) {
            (Some(from), Some(to)) => Some(distance_km(*from, to)),
            _ => None,
        };
        let score = self.scorer.score(&listing, origin);
        ScoredListing {
            listing,
            score,
            distance_km: distance,
        }
    }
}

/// Order results according to the requested sort key.
///
/// Every ordering tie-breaks on `created_at` descending; the recommended
/// order prefers the distance tie-break when both sides have one. The sort is
/// stable, so equal keys preserve catalog order beyond the explicit
/// tie-breaks.
fn sort_results(results: &mut [ScoredListing], sort_key: SortKey) {
    match sort_key {
        SortKey::PriceLow => results.sort_by(|a, b| {
            a.listing
                .price
                .total_cmp(&b.listing.price)
                .then_with(|| newest_first(a, b))
        }),
        SortKey::PriceHigh => results.sort_by(|a, b| {
            b.listing
                .price
                .total_cmp(&a.listing.price)
                .then_with(|| newest_first(a, b))
        }),
        SortKey::Rating => results.sort_by(|a, b| {
            b.listing
                .average_rating
                .total_cmp(&a.listing.average_rating)
                .then_with(|| newest_first(a, b))
        }),
        SortKey::Newest => results.sort_by(newest_first),
        SortKey::Distance => {
            results.sort_by(|a, b| closest_first(a, b).then_with(|| newest_first(a, b)));
        }
        SortKey::Recommended => results.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| closest_first(a, b))
                .then_with(|| newest_first(a, b))
        }),
    }
}

/// Descending `created_at`: newer listings first.
fn newest_first(a: &ScoredListing, b: &ScoredListing) -> Ordering {
    b.listing.created_at.cmp(&a.listing.created_at)
}

/// Ascending distance; listings without a distance sort last.
fn closest_first(a: &ScoredListing, b: &ScoredListing) -> Ordering {
    match (a.distance_km, b.distance_km) {
        (Some(da), Some(db)) => da.total_cmp(&db),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
