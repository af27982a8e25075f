pub mod auth;
pub mod entry;
pub mod learning_log;
pub mod topic;
