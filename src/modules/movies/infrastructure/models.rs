use crate::schema::movies;
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use diesel::prelude::*;
use uuid::Uuid;

// ============= MOVIE MODELS =============

// For reading from database
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = movies)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MovieModel {
    pub id: Uuid,
    pub title: String,
    pub release_date: NaiveDate,
    pub genre: String,
    pub price: BigDecimal,
}

// For inserting new movies
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = movies)]
pub struct NewMovie {
    pub id: Uuid,
    pub title: String,
    pub release_date: NaiveDate,
    pub genre: String,
    pub price: BigDecimal,
}
