/// Test data factories using builder pattern
///
/// Provides convenient methods to create test data with sensible defaults
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use marquee_lib::modules::movies::Movie;
use std::str::FromStr;

pub struct MovieFactory {
    title: String,
    genre: String,
    release_date: NaiveDate,
    price: BigDecimal,
}

impl Default for MovieFactory {
    fn default() -> Self {
        Self {
            title: "Untitled".to_string(),
            genre: "Drama".to_string(),
            release_date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            price: BigDecimal::from_str("9.99").unwrap(),
        }
    }
}

impl MovieFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_genre(mut self, genre: &str) -> Self {
        self.genre = genre.to_string();
        self
    }

    pub fn with_release_date(mut self, year: i32, month: u32, day: u32) -> Self {
        self.release_date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        self
    }

    pub fn with_price(mut self, price: &str) -> Self {
        self.price = BigDecimal::from_str(price).unwrap();
        self
    }

    pub fn build(self) -> Movie {
        Movie::new(self.title, self.release_date, self.genre, self.price)
    }
}

/// ("Alien", "Sci-Fi"), ("Amelie", "Romance"), ("Avatar", "Sci-Fi")
pub fn three_movie_catalogue() -> Vec<Movie> {
    vec![
        MovieFactory::new()
            .with_title("Alien")
            .with_genre("Sci-Fi")
            .with_release_date(1979, 5, 25)
            .build(),
        MovieFactory::new()
            .with_title("Amelie")
            .with_genre("Romance")
            .with_release_date(2001, 4, 25)
            .build(),
        MovieFactory::new()
            .with_title("Avatar")
            .with_genre("Sci-Fi")
            .with_release_date(2009, 12, 18)
            .build(),
    ]
}

/// A larger catalogue with repeated genres and awkward titles
pub fn mixed_catalogue() -> Vec<Movie> {
    let entries = [
        ("When Harry Met Sally", "Romantic Comedy"),
        ("Ghostbusters", "Comedy"),
        ("Ghostbusters 2", "Comedy"),
        ("Rio Bravo", "Western"),
        ("100% Wolf", "Comedy"),
        ("ghost_story", "Horror"),
        ("A Ghost Story", "Drama"),
    ];
    entries
        .iter()
        .map(|(title, genre)| MovieFactory::new().with_title(title).with_genre(genre).build())
        .collect()
}
