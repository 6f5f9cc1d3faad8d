//! Listing categories for the two catalogs the engine serves.
//!
//! The closed enum gives compile-time safety for category filters.
//!
//! # Examples
//! ```
//! use stayfinder_core::ListingCategory;
//!
//! assert_eq!(ListingCategory::Pg.as_str(), "pg");
//! assert_eq!(ListingCategory::Hostel.to_string(), "hostel");
//! ```

/// Accommodation and meal-service categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ListingCategory {
    /// Paying-guest accommodation.
    Pg,
    /// Self-contained flat.
    Flat,
    /// Shared hostel.
    Hostel,
    /// Single room in a shared dwelling.
    Room,
    /// Vegetarian mess facility.
    VegMess,
    /// Non-vegetarian mess facility.
    NonVegMess,
    /// Mess facility serving both menus.
    MixedMess,
}

impl ListingCategory {
    /// Return the category as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use stayfinder_core::ListingCategory;
    ///
    /// assert_eq!(ListingCategory::VegMess.as_str(), "veg-mess");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pg => "pg",
            Self::Flat => "flat",
            Self::Hostel => "hostel",
            Self::Room => "room",
            Self::VegMess => "veg-mess",
            Self::NonVegMess => "non-veg-mess",
            Self::MixedMess => "mixed-mess",
        }
    }
}

impl std::fmt::Display for ListingCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ListingCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pg" => Ok(Self::Pg),
            "flat" => Ok(Self::Flat),
            "hostel" => Ok(Self::Hostel),
            "room" => Ok(Self::Room),
            "veg-mess" => Ok(Self::VegMess),
            "non-veg-mess" => Ok(Self::NonVegMess),
            "mixed-mess" => Ok(Self::MixedMess),
            _ => Err(format!("unknown listing category '{s}'")),
        }
    }
}
