use async_trait::async_trait;

use crate::entry::application::ports::{
    incoming::use_cases::{CreateEntryCommand, CreateEntryError, CreateEntryUseCase},
    outgoing::{CreateEntryData, EntryRepository, EntryRepositoryError, EntryResult},
};

#[derive(Debug, Clone)]
pub struct CreateEntryService<R>
where
    R: EntryRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateEntryService<R>
where
    R: EntryRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateEntryUseCase for CreateEntryService<R>
where
    R: EntryRepository + Send + Sync,
{
    async fn execute(&self, command: CreateEntryCommand) -> Result<EntryResult, CreateEntryError> {
        let data = CreateEntryData {
            topic_id: command.topic_id(),
            text: command.text().to_string(),
            slug: command.slug().to_string(),
        };

        self.repository
            .create_entry(data)
            .await
            .map_err(|e| match e {
                EntryRepositoryError::EntryAlreadyExists => CreateEntryError::EntryAlreadyExists,
                other => CreateEntryError::RepositoryError(other.to_string()),
            })
    }
}
