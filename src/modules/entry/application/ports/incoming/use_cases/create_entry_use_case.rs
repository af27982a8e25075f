use async_trait::async_trait;

use crate::entry::application::ports::outgoing::EntryResult;

use super::CreateEntryCommand;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateEntryError {
    #[error("Entry already exists")]
    EntryAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateEntryUseCase: Send + Sync {
    async fn execute(&self, command: CreateEntryCommand) -> Result<EntryResult, CreateEntryError>;
}
