//! Boolean capability flags a listing can advertise.
//!
//! The flag set is closed: the comparison engine normalises amenity coverage
//! against the full tracked set, so an open-ended string map would make that
//! denominator meaningless.

use std::collections::BTreeSet;

/// A single boolean capability a listing can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Amenity {
    /// Wireless internet.
    Wifi,
    /// Air conditioning.
    Ac,
    /// Meals included in the rent.
    FoodIncluded,
    /// Two- or four-wheeler parking.
    Parking,
    /// On-site laundry.
    Laundry,
    /// Power backup during outages.
    PowerBackup,
    /// Attached bathroom.
    AttachedBathroom,
    /// CCTV coverage of common areas.
    Cctv,
}

impl Amenity {
    /// Every amenity flag the engine tracks.
    pub const ALL: [Self; 8] = [
        Self::Wifi,
        Self::Ac,
        Self::FoodIncluded,
        Self::Parking,
        Self::Laundry,
        Self::PowerBackup,
        Self::AttachedBathroom,
        Self::Cctv,
    ];

    /// Return the amenity as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Wifi => "wifi",
            Self::Ac => "ac",
            Self::FoodIncluded => "food-included",
            Self::Parking => "parking",
            Self::Laundry => "laundry",
            Self::PowerBackup => "power-backup",
            Self::AttachedBathroom => "attached-bathroom",
            Self::Cctv => "cctv",
        }
    }
}

impl std::fmt::Display for Amenity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A set of amenity flags.
///
/// Used both on listings (capabilities offered) and on filters (capabilities
/// required). Only presence is meaningful; "must not have WiFi" is not a
/// representable constraint.
///
/// # Examples
/// ```
/// use stayfinder_core::{Amenity, AmenitySet};
///
/// let offered = AmenitySet::new().with(Amenity::Wifi).with(Amenity::Ac);
/// let required = AmenitySet::new().with(Amenity::Wifi);
/// assert!(offered.contains_all(&required));
/// assert!(!required.contains_all(&offered));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AmenitySet {
    flags: BTreeSet<Amenity>,
}

impl AmenitySet {
    /// Construct an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            flags: BTreeSet::new(),
        }
    }

    /// Return a copy of the set with `amenity` added.
    #[must_use]
    pub fn with(mut self, amenity: Amenity) -> Self {
        self.flags.insert(amenity);
        self
    }

    /// Add `amenity` to the set.
    pub fn insert(&mut self, amenity: Amenity) {
        self.flags.insert(amenity);
    }

    /// Report whether `amenity` is present.
    #[must_use]
    pub fn contains(&self, amenity: Amenity) -> bool {
        self.flags.contains(&amenity)
    }

    /// Report whether every flag in `required` is present in `self`.
    #[must_use]
    pub fn contains_all(&self, required: &Self) -> bool {
        self.flags.is_superset(&required.flags)
    }

    /// Number of flags present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Report whether no flags are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Iterate over the flags in a stable order.
    pub fn iter(&self) -> impl Iterator<Item = Amenity> + '_ {
        self.flags.iter().copied()
    }
}

impl FromIterator<Amenity> for AmenitySet {
    fn from_iter<I: IntoIterator<Item = Amenity>>(iter: I) -> Self {
        Self {
            flags: iter.into_iter().collect(),
        }
    }
}
