mod entry_query;
mod entry_repository;

pub use entry_query::{EntryQuery, EntryQueryError, EntryQueryResult};
pub use entry_repository::{
    CreateEntryData, EntryRepository, EntryRepositoryError, EntryResult, UpdateEntryData,
};
