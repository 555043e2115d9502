pub mod clock;
pub mod schedule;
pub mod theater;

pub use clock::{DateProvider, FixedDateProvider, SystemDateProvider};
pub use schedule::build_daily_schedule;
pub use theater::Theater;

use marquee_catalog::CatalogError;
use marquee_domain::DomainError;

/// Theater-level errors
#[derive(Debug, thiserror::Error)]
pub enum TheaterError {
    #[error("invalid reservation request: {0}")]
    InvalidRequest(String),
    #[error("no showing scheduled for sequence {0}")]
    ShowingNotFound(u32),
    #[error("schedule construction failed: {0}")]
    Schedule(String),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

pub type TheaterResult<T> = Result<T, TheaterError>;
