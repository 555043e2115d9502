use serde::{Deserialize, Serialize};

use crate::DomainError;

/// A customer making a reservation. Value equality over (name, id); two
/// customers with the same fields are interchangeable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Customer {
    name: String,
    id: String,
}

impl Customer {
    /// Fails if either the name or the id is empty.
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let id = id.into();
        if name.is_empty() || id.is_empty() {
            return Err(DomainError::InvalidCustomer(
                "name and id must not be empty".to_string(),
            ));
        }
        Ok(Self { name, id })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}
