use super::domain::{ApplicantId, ApplicantProfile, Opportunity, OpportunityId};

/// Profile storage abstraction so the matching service can be exercised in
/// isolation from the host's persistence layer.
pub trait ProfileStore: Send + Sync {
    fn fetch(&self, id: &ApplicantId) -> Result<Option<ApplicantProfile>, StoreError>;
}

/// Opportunity lookup abstraction over the host's catalog or search index.
pub trait OpportunityCatalog: Send + Sync {
    fn fetch(&self, id: &OpportunityId) -> Result<Option<Opportunity>, StoreError>;
    fn open_opportunities(&self) -> Result<Vec<Opportunity>, StoreError>;
}

/// Error enumeration for collaborator store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
