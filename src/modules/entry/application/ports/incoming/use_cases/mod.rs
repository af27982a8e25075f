mod create_entry_use_case;
mod edit_entry_use_case;
mod entry_command;
mod get_entry_use_case;

pub use create_entry_use_case::{CreateEntryError, CreateEntryUseCase};
pub use edit_entry_use_case::{EditEntryError, EditEntryUseCase};
pub use entry_command::{CreateEntryCommand, EditEntryCommand, EntryCommandError};
pub use get_entry_use_case::{EntryWithTopic, GetEntryError, GetEntryUseCase};
