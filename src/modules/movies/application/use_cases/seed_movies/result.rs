/// Outcome of seeding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedMoviesResult {
    pub inserted: usize,
    /// True when the catalogue already had rows and nothing was written
    pub skipped: bool,
}
