// Public so the OpenAPI derive can reach each handler's `__path_*` item.
pub mod edit_entry;
pub mod get_topic;
pub mod get_topics;
pub mod index;
pub mod new_entry;
pub mod new_topic;
mod submission;
mod views;

pub use edit_entry::{edit_entry_form_handler, edit_entry_handler};
pub use get_topic::get_topic_handler;
pub use get_topics::get_topics_handler;
pub use index::{index_handler, IndexView, RouteLink};
pub use new_entry::{create_entry_handler, new_entry_form_handler};
pub use new_topic::{create_topic_handler, new_topic_form_handler};
pub use views::{EntryFormView, EntryView, TopicDetailView, TopicListView, TopicView};
