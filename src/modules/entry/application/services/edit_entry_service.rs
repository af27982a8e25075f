use async_trait::async_trait;

use crate::entry::application::ports::{
    incoming::use_cases::{EditEntryCommand, EditEntryError, EditEntryUseCase},
    outgoing::{EntryRepository, EntryRepositoryError, EntryResult, UpdateEntryData},
};

#[derive(Debug, Clone)]
pub struct EditEntryService<R>
where
    R: EntryRepository + Send + Sync,
{
    repository: R,
}

impl<R> EditEntryService<R>
where
    R: EntryRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> EditEntryUseCase for EditEntryService<R>
where
    R: EntryRepository + Send + Sync,
{
    async fn execute(&self, command: EditEntryCommand) -> Result<EntryResult, EditEntryError> {
        let data = UpdateEntryData {
            entry_id: command.entry_id(),
            text: command.text().to_string(),
            slug: command.slug().to_string(),
        };

        self.repository
            .update_entry(data)
            .await
            .map_err(|e| match e {
                EntryRepositoryError::EntryNotFound => EditEntryError::EntryNotFound,
                EntryRepositoryError::EntryAlreadyExists => EditEntryError::EntryAlreadyExists,
                other => EditEntryError::RepositoryError(other.to_string()),
            })
    }
}
