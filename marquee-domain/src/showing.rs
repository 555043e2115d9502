use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use marquee_catalog::{DiscountEngine, Movie, TicketContext};

use crate::DomainError;

/// One screening of a movie: the movie, its 1-based position within the
/// day's schedule, and its start time. Showings share their movie with the
/// rest of the schedule and are immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Showing {
    movie: Arc<Movie>,
    sequence_of_day: u32,
    start_time: DateTime<Utc>,
}

impl Showing {
    /// Fails if the sequence is not positive.
    pub fn new(
        movie: Arc<Movie>,
        sequence_of_day: u32,
        start_time: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if sequence_of_day == 0 {
            return Err(DomainError::InvalidShowing(
                "sequence of day must be positive".to_string(),
            ));
        }
        Ok(Self { movie, sequence_of_day, start_time })
    }

    pub fn movie(&self) -> &Movie {
        &self.movie
    }

    pub fn sequence_of_day(&self) -> u32 {
        self.sequence_of_day
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    /// Whether this showing sits at the given sequence of the day
    pub fn matches_sequence(&self, sequence: u32) -> bool {
        self.sequence_of_day == sequence
    }

    /// Per-ticket fee for this showing under the fixed discount rules
    pub fn fee(&self) -> f64 {
        self.fee_with(&DiscountEngine::default())
    }

    /// Per-ticket fee under an explicit discount engine
    pub fn fee_with(&self, engine: &DiscountEngine) -> f64 {
        engine.ticket_fee(&TicketContext {
            is_special: self.movie.is_special(),
            start_time: self.start_time,
            sequence_of_day: self.sequence_of_day,
            base_price: self.movie.ticket_price(),
        })
    }
}
