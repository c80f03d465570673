// Repository implementations
pub mod in_memory_repository;
pub mod movie_repository_impl;

// Shared mapping utilities
pub mod mapper;

// Re-export repository implementations
pub use in_memory_repository::InMemoryMovieRepository;
pub use movie_repository_impl::MovieRepositoryImpl;
