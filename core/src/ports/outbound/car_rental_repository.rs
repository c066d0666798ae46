use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::models::rental::CarRentalDTO;

#[derive(Debug, Error)]
pub enum ReadError {
    /// No rental exists under the given identity. A domain-level outcome;
    /// callers decide whether to treat it as a user error.
    #[error("no car rental found for id {id}")]
    NotFound { id: Uuid },

    /// The datastore itself failed. Propagated unmodified as an
    /// infrastructure error, never mapped to a domain outcome.
    #[error("datastore failure while reading car rental")]
    Datastore(#[source] anyhow::Error),
}

/// Resolves a rental identity to its DTO.
///
/// A pure query: no side effects, and the nested car/model data reflects the
/// currently persisted state.
#[async_trait]
pub trait CarRentalReadRepository: Send + Sync {
    async fn read(&self, id: Uuid) -> Result<CarRentalDTO, ReadError>;
}
