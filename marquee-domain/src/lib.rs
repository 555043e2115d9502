pub mod customer;
pub mod reservation;
pub mod showing;

pub use customer::Customer;
pub use reservation::Reservation;
pub use showing::Showing;

/// Booking-side validation errors
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("invalid customer: {0}")]
    InvalidCustomer(String),
    #[error("invalid showing: {0}")]
    InvalidShowing(String),
    #[error("invalid reservation: {0}")]
    InvalidReservation(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
