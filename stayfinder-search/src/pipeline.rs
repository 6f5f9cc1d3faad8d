//! Conjunctive filter pipeline over a listing catalog.

use log::debug;
use stayfinder_core::{Listing, SearchError, SearchFilters, distance_km};

/// Applies the optional predicates of a [`SearchFilters`] value to a catalog.
///
/// Predicates combine with AND; each is skipped when its filter field is
/// absent. The pipeline never sorts; ordering belongs to the orchestrator so
/// filtering and sorting stay independently testable.
///
/// # Examples
/// ```
/// use chrono::Utc;
/// use stayfinder_core::{Listing, ListingCategory, SearchFilters};
/// use stayfinder_search::FilterPipeline;
///
/// # fn main() -> Result<(), stayfinder_core::SearchError> {
/// let catalog = vec![
///     Listing::new(1, ListingCategory::Pg, 6_000.0, Utc::now()).unwrap(),
///     Listing::new(2, ListingCategory::Flat, 14_000.0, Utc::now()).unwrap(),
/// ];
/// let filters = SearchFilters {
///     price_max: Some(10_000.0),
///     ..SearchFilters::default()
/// };
/// let survivors = FilterPipeline::apply(&catalog, &filters)?;
/// assert_eq!(survivors.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterPipeline;

impl FilterPipeline {
    /// Return the listings that pass every active predicate.
    ///
    /// A configuration that matches nothing yields an empty `Vec`, never an
    /// error.
    ///
    /// # Errors
    /// Returns [`SearchError::NonFiniteFilter`] when a numeric bound is `NaN`
    /// or infinite.
    pub fn apply(catalog: &[Listing], filters: &SearchFilters) -> Result<Vec<Listing>, SearchError> {
        filters.validate()?;
        let survivors: Vec<Listing> = catalog
            .iter()
            .filter(|listing| Self::matches(listing, filters))
            .cloned()
            .collect();
        debug!(
            "filter pass kept {} of {} listings",
            survivors.len(),
            catalog.len()
        );
        Ok(survivors)
    }

    /// Evaluate every active predicate against one listing.
    fn matches(listing: &Listing, filters: &SearchFilters) -> bool {
        if let Some(query) = filters.text_query.as_deref()
            && !listing.matches_text(query)
        {
            return false;
        }
        if let Some(category) = filters.category
            && listing.category != category
        {
            return false;
        }
        if let Some(min) = filters.price_min
            && listing.price < min
        {
            return false;
        }
        if let Some(max) = filters.price_max
            && listing.price > max
        {
            return false;
        }
        if let Some(min_rating) = filters.min_rating
            && listing.average_rating < min_rating
        {
            return false;
        }
        if !listing.amenities.contains_all(&filters.amenities) {
            return false;
        }
        if let Some(available) = filters.available
            && listing.available != available
        {
            return false;
        }
        Self::matches_spatial(listing, filters)
    }

    /// The spatial predicate: active only when both origin and radius are
    /// supplied. A listing without coordinates fails an active spatial
    /// filter: there is no meaningful distance to evaluate.
    fn matches_spatial(listing: &Listing, filters: &SearchFilters) -> bool {
        let (Some(origin), Some(max_km)) = (filters.origin, filters.max_distance_km) else {
            return true;
        };
        listing
            .location
            .is_some_and(|location| distance_km(origin, location) <= max_km)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rstest::{fixture, rstest};
    use stayfinder_core::{Amenity, AmenitySet, GeoPoint, ListingCategory};

    fn listing(id: u64, category: ListingCategory, price: f64) -> Listing {
        Listing::new(id, category, price, Utc::now()).unwrap()
    }

    fn bangalore() -> GeoPoint {
        GeoPoint::new(12.9716, 77.5946).unwrap()
    }

    #[fixture]
    fn catalog() -> Vec<Listing> {
        vec![
            listing(1, ListingCategory::Pg, 6_000.0)
                .with_name("Sunrise PG")
                .with_locality("Koramangala")
                .with_location(bangalore())
                .with_rating(4.2)
                .unwrap()
                .with_amenities(AmenitySet::new().with(Amenity::Wifi).with(Amenity::Ac)),
            listing(2, ListingCategory::Flat, 14_000.0)
                .with_name("Lakeview Flat")
                .with_locality("HSR Layout")
                .with_location(GeoPoint::new(12.9121, 77.6446).unwrap())
                .with_rating(3.8)
                .unwrap()
                .with_amenities(AmenitySet::new().with(Amenity::Parking)),
            listing(3, ListingCategory::Hostel, 4_500.0)
                .with_name("Campus Hostel")
                .with_rating(4.6)
                .unwrap()
                .with_availability(false),
        ]
    }

    fn ids(listings: &[Listing]) -> Vec<u64> {
        listings.iter().map(|l| l.id).collect()
    }

    #[rstest]
    fn no_filters_pass_everything(catalog: Vec<Listing>) {
        let survivors = FilterPipeline::apply(&catalog, &SearchFilters::default()).unwrap();
        assert_eq!(survivors.len(), catalog.len());
    }

    #[test]
    fn empty_catalog_yields_empty_result() {
        let survivors = FilterPipeline::apply(&[], &SearchFilters::default()).unwrap();
        assert!(survivors.is_empty());
    }

    #[rstest]
    fn category_filter_is_exact(catalog: Vec<Listing>) {
        let filters = SearchFilters {
            category: Some(ListingCategory::Flat),
            ..SearchFilters::default()
        };
        assert_eq!(ids(&FilterPipeline::apply(&catalog, &filters).unwrap()), [2]);
    }

    #[rstest]
    fn price_bounds_are_inclusive(catalog: Vec<Listing>) {
        let filters = SearchFilters {
            price_min: Some(4_500.0),
            price_max: Some(6_000.0),
            ..SearchFilters::default()
        };
        assert_eq!(
            ids(&FilterPipeline::apply(&catalog, &filters).unwrap()),
            [1, 3]
        );
    }

    #[rstest]
    fn unmatchable_min_rating_yields_empty_not_error(catalog: Vec<Listing>) {
        let filters = SearchFilters {
            min_rating: Some(4.9),
            ..SearchFilters::default()
        };
        assert!(FilterPipeline::apply(&catalog, &filters).unwrap().is_empty());
    }

    #[rstest]
    fn text_query_is_case_insensitive_substring(catalog: Vec<Listing>) {
        let filters = SearchFilters {
            text_query: Some("koramangala".into()),
            ..SearchFilters::default()
        };
        assert_eq!(ids(&FilterPipeline::apply(&catalog, &filters).unwrap()), [1]);
    }

    #[rstest]
    fn requested_amenities_must_all_be_present(catalog: Vec<Listing>) {
        let filters = SearchFilters {
            amenities: AmenitySet::new().with(Amenity::Wifi).with(Amenity::Ac),
            ..SearchFilters::default()
        };
        assert_eq!(ids(&FilterPipeline::apply(&catalog, &filters).unwrap()), [1]);

        let stricter = SearchFilters {
            amenities: AmenitySet::new()
                .with(Amenity::Wifi)
                .with(Amenity::Laundry),
            ..SearchFilters::default()
        };
        assert!(
            FilterPipeline::apply(&catalog, &stricter)
                .unwrap()
                .is_empty()
        );
    }

    #[rstest]
    fn unavailable_listings_pass_unless_filtered(catalog: Vec<Listing>) {
        let unfiltered = FilterPipeline::apply(&catalog, &SearchFilters::default()).unwrap();
        assert!(ids(&unfiltered).contains(&3));

        let filters = SearchFilters {
            available: Some(true),
            ..SearchFilters::default()
        };
        assert_eq!(
            ids(&FilterPipeline::apply(&catalog, &filters).unwrap()),
            [1, 2]
        );
    }

    #[rstest]
    fn spatial_filter_keeps_listings_within_radius(catalog: Vec<Listing>) {
        let filters = SearchFilters {
            origin: Some(bangalore()),
            max_distance_km: Some(1.0),
            ..SearchFilters::default()
        };
        // Listing 1 sits exactly at the origin; listing 2 is ~8 km away.
        assert_eq!(ids(&FilterPipeline::apply(&catalog, &filters).unwrap()), [1]);
    }

    #[rstest]
    fn spatial_filter_excludes_listings_without_coordinates(catalog: Vec<Listing>) {
        let filters = SearchFilters {
            origin: Some(bangalore()),
            max_distance_km: Some(10_000.0),
            ..SearchFilters::default()
        };
        // Listing 3 has no location; a huge radius still cannot admit it.
        let survivors = FilterPipeline::apply(&catalog, &filters).unwrap();
        assert!(!ids(&survivors).contains(&3));
    }

    #[rstest]
    fn radius_without_origin_is_inactive(catalog: Vec<Listing>) {
        let filters = SearchFilters {
            max_distance_km: Some(0.5),
            ..SearchFilters::default()
        };
        assert_eq!(
            FilterPipeline::apply(&catalog, &filters).unwrap().len(),
            catalog.len()
        );
    }

    #[rstest]
    fn non_finite_bound_is_rejected(catalog: Vec<Listing>) {
        let filters = SearchFilters {
            price_max: Some(f64::NAN),
            ..SearchFilters::default()
        };
        assert!(matches!(
            FilterPipeline::apply(&catalog, &filters),
            Err(SearchError::NonFiniteFilter { .. })
        ));
    }
}
