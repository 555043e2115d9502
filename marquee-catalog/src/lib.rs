pub mod movie;
pub mod pricing;

pub use movie::{Movie, MOVIE_CODE_SPECIAL};
pub use pricing::{DiscountConfig, DiscountEngine, TicketContext};

/// Catalog-related errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid movie: {0}")]
    InvalidMovie(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
