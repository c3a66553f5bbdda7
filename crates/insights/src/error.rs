use thiserror::Error;

use catalogue_client::ClientError;
use catalogue_core::DomainError;

pub type InsightsResult<T> = Result<T, InsightsError>;

/// Any failure aborts the whole operation; nothing partial is returned.
#[derive(Debug, Error)]
pub enum InsightsError {
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error(transparent)]
    Domain(#[from] DomainError),
}
