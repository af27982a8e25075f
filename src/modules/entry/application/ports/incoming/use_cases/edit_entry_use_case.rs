use async_trait::async_trait;

use crate::entry::application::ports::outgoing::EntryResult;

use super::EditEntryCommand;

#[derive(Debug, Clone, thiserror::Error)]
pub enum EditEntryError {
    #[error("Entry not found")]
    EntryNotFound,

    /// Another entry of the same topic already uses the new slug.
    #[error("Entry already exists")]
    EntryAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait EditEntryUseCase: Send + Sync {
    async fn execute(&self, command: EditEntryCommand) -> Result<EntryResult, EditEntryError>;
}
