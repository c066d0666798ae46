use uuid::Uuid;

/// The renting party.
///
/// Rentals reference customers by id only; the rest of the customer record
/// lives on the booking side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: Uuid,
    pub full_name: String,
}

impl Customer {
    pub fn new(id: Uuid, full_name: impl Into<String>) -> Self {
        Self {
            id,
            full_name: full_name.into(),
        }
    }
}
