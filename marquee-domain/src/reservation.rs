use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Customer, DomainError, Showing};

/// A priced reservation of tickets for one showing. Ephemeral: nothing in
/// the system retains it, and no seats are held.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: Uuid,
    pub customer: Customer,
    pub showing: Showing,
    pub ticket_count: u32,
}

impl Reservation {
    /// Fails if the ticket count is zero.
    pub fn new(
        customer: Customer,
        showing: Showing,
        ticket_count: u32,
    ) -> Result<Self, DomainError> {
        if ticket_count == 0 {
            return Err(DomainError::InvalidReservation(
                "ticket count must be positive".to_string(),
            ));
        }
        Ok(Self { id: Uuid::new_v4(), customer, showing, ticket_count })
    }

    /// Total fee: the showing's per-ticket fee times the ticket count
    pub fn total_fee(&self) -> f64 {
        self.showing.fee() * self.ticket_count as f64
    }
}
