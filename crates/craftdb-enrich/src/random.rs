//! Seeded generator for the listing fields that have no real provenance:
//! rating, popularity, review count and listing date.

use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::EnrichError;

/// Placeholder listing statistics for a new product.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingStats {
    /// 4.0 to 5.0, one decimal place.
    pub rating: f64,
    pub popularity: u32,
    pub reviews: u32,
    /// `YYYY-MM-DD` within the configured year.
    pub date: String,
}

/// Draws [`ListingStats`] from a seedable RNG so runs can be reproduced.
#[derive(Debug)]
pub struct FieldRandomizer {
    rng: StdRng,
    year_start: NaiveDate,
    days_in_year: u64,
}

impl FieldRandomizer {
    /// Build a randomizer for listing dates in `year`.
    ///
    /// With `Some(seed)` the sequence is deterministic; `None` seeds from
    /// the operating system.
    ///
    /// # Errors
    ///
    /// Returns [`EnrichError::InvalidDateYear`] if `year` is not representable.
    pub fn new(seed: Option<u64>, year: i32) -> Result<Self, EnrichError> {
        let year_start =
            NaiveDate::from_ymd_opt(year, 1, 1).ok_or(EnrichError::InvalidDateYear { year })?;
        let year_end =
            NaiveDate::from_ymd_opt(year, 12, 31).ok_or(EnrichError::InvalidDateYear { year })?;
        let days_in_year = u64::try_from((year_end - year_start).num_days() + 1).unwrap_or(365);

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            rng,
            year_start,
            days_in_year,
        })
    }

    /// Draw the next set of listing statistics.
    pub fn listing_stats(&mut self) -> ListingStats {
        let rating = f64::from(self.rng.random_range(40_u8..=50)) / 10.0;
        let popularity = self.rng.random_range(50..=100);
        let reviews = self.rng.random_range(5..=150);

        let offset = self.rng.random_range(0..self.days_in_year);
        let date = self
            .year_start
            .checked_add_days(Days::new(offset))
            .unwrap_or(self.year_start);

        ListingStats {
            rating,
            popularity,
            reviews,
            date: date.format("%Y-%m-%d").to_string(),
        }
    }
}
