/// Conversions between database models and the Movie entity
use crate::modules::movies::domain::Movie;
use crate::modules::movies::infrastructure::models::{MovieModel, NewMovie};

impl From<MovieModel> for Movie {
    fn from(model: MovieModel) -> Self {
        Self {
            id: model.id,
            title: model.title,
            release_date: model.release_date,
            genre: model.genre,
            price: model.price,
        }
    }
}

impl From<&Movie> for NewMovie {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            release_date: movie.release_date,
            genre: movie.genre.clone(),
            price: movie.price.clone(),
        }
    }
}
