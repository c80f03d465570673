mod command;
mod handler;
mod result;

pub use command::SeedMoviesCommand;
pub use handler::SeedMoviesHandler;
pub use result::SeedMoviesResult;
