use std::sync::Arc;

use marquee_domain::{Customer, Reservation, Showing};

use crate::{build_daily_schedule, DateProvider, TheaterError};

/// A single theater and its schedule for today. The schedule is built once
/// at construction and never mutated; `reserve` hands back a fresh
/// reservation each call and retains nothing.
pub struct Theater {
    provider: Arc<dyn DateProvider>,
    schedule: Vec<Showing>,
}

impl Theater {
    pub fn new(provider: Arc<dyn DateProvider>) -> Result<Self, TheaterError> {
        let schedule = build_daily_schedule(provider.as_ref())?;
        Ok(Self { provider, schedule })
    }

    /// Today's showings in sequence order
    pub fn schedule(&self) -> &[Showing] {
        &self.schedule
    }

    pub fn current_date(&self) -> chrono::NaiveDate {
        self.provider.current_date()
    }

    /// Look up a showing by its sequence of the day. Sequence numbers are
    /// schedule positions, so this is an index at `sequence - 1`.
    pub fn showing(&self, sequence: u32) -> Result<&Showing, TheaterError> {
        sequence
            .checked_sub(1)
            .and_then(|index| self.schedule.get(index as usize))
            .ok_or(TheaterError::ShowingNotFound(sequence))
    }

    /// Reserve tickets for the showing at the given sequence. Validates the
    /// ticket count before resolving the showing, matching the original
    /// booking flow.
    pub fn reserve(
        &self,
        customer: Customer,
        sequence: u32,
        ticket_count: u32,
    ) -> Result<Reservation, TheaterError> {
        if ticket_count == 0 {
            return Err(TheaterError::InvalidRequest(
                "ticket count must be positive".to_string(),
            ));
        }
        let showing = self.showing(sequence)?;
        let reservation = Reservation::new(customer, showing.clone(), ticket_count)?;
        tracing::info!(
            reservation_id = %reservation.id,
            sequence,
            ticket_count,
            total_fee = reservation.total_fee(),
            "created reservation"
        );
        Ok(reservation)
    }
}
