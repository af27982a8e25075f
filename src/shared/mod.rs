pub mod api;
pub mod config;
pub mod ownership;
pub mod slug;
