mod create_entry_service;
mod edit_entry_service;
mod get_entry_service;

pub use create_entry_service::CreateEntryService;
pub use edit_entry_service::EditEntryService;
pub use get_entry_service::GetEntryService;
