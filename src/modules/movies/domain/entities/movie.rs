use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: Uuid,
    pub title: String,
    pub release_date: NaiveDate,
    pub genre: String,
    pub price: BigDecimal,
}

impl Movie {
    pub fn new(
        title: impl Into<String>,
        release_date: NaiveDate,
        genre: impl Into<String>,
        price: BigDecimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            release_date,
            genre: genre.into(),
            price,
        }
    }
}
