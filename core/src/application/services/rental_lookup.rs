use tracing::debug;
use uuid::Uuid;

use crate::domain::models::rental::CarRentalDTO;
use crate::ports::outbound::car_rental_repository::{CarRentalReadRepository, ReadError};

pub struct RentalLookupService {
    repository: Box<dyn CarRentalReadRepository>,
}

impl RentalLookupService {
    pub fn new(repository: Box<dyn CarRentalReadRepository>) -> Self {
        Self { repository }
    }

    pub async fn read(&self, id: Uuid) -> Result<CarRentalDTO, ReadError> {
        debug!(%id, "reading car rental");
        self.repository.read(id).await
    }
}
