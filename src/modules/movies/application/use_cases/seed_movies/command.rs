use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use std::str::FromStr;

use crate::modules::movies::domain::Movie;
use crate::shared::errors::{AppError, AppResult};

/// Command to populate an empty catalogue
#[derive(Debug, Clone)]
pub struct SeedMoviesCommand {
    pub movies: Vec<Movie>,
}

impl SeedMoviesCommand {
    /// The stock catalogue inserted on first start
    pub fn sample_catalogue() -> AppResult<Self> {
        let entries = [
            ("When Harry Met Sally", (1989, 2, 12), "Romantic Comedy", "7.99"),
            ("Ghostbusters", (1984, 3, 13), "Comedy", "8.99"),
            ("Ghostbusters 2", (1986, 2, 23), "Comedy", "9.99"),
            ("Rio Bravo", (1959, 4, 15), "Western", "3.99"),
        ];

        let movies = entries
            .into_iter()
            .map(|(title, (year, month, day), genre, price)| -> AppResult<Movie> {
                let release_date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
                    AppError::InvalidInput(format!("Invalid release date for '{}'", title))
                })?;
                let price = BigDecimal::from_str(price).map_err(|e| {
                    AppError::InvalidInput(format!("Invalid price for '{}': {}", title, e))
                })?;
                Ok(Movie::new(title, release_date, genre, price))
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Self { movies })
    }
}
