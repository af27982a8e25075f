pub mod forms;
pub mod record_access_coordinator;
