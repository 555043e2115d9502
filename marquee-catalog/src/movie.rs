use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::CatalogError;

/// Special code marking a movie as eligible for the special-movie discount.
/// Any other code, including negative ones, means the movie is regular.
pub const MOVIE_CODE_SPECIAL: i32 = 1;

/// A movie in the catalog: title, length, base ticket price and a special
/// code. Value equality over all four fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    title: String,
    running_time: Duration,
    ticket_price: f64,
    special_code: i32,
}

impl Movie {
    /// Build a validated movie. Fails if the title is empty, the running
    /// time is zero, or the ticket price is negative.
    pub fn new(
        title: impl Into<String>,
        running_time: Duration,
        ticket_price: f64,
        special_code: i32,
    ) -> Result<Self, CatalogError> {
        let title = title.into();
        if title.is_empty() {
            return Err(CatalogError::InvalidMovie("title must not be empty".to_string()));
        }
        if running_time.is_zero() {
            return Err(CatalogError::InvalidMovie(
                "running time must be positive".to_string(),
            ));
        }
        if ticket_price < 0.0 {
            return Err(CatalogError::InvalidMovie(format!(
                "ticket price must not be negative, got {ticket_price}"
            )));
        }
        Ok(Self { title, running_time, ticket_price, special_code })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn running_time(&self) -> Duration {
        self.running_time
    }

    /// Base price of a single ticket, before any showing discount.
    pub fn ticket_price(&self) -> f64 {
        self.ticket_price
    }

    /// Whether this movie carries the special code that entitles it to the
    /// 20% special-movie discount.
    pub fn is_special(&self) -> bool {
        self.special_code == MOVIE_CODE_SPECIAL
    }
}
