mod create_topic_use_case;
mod get_topic_use_case;
mod get_topics_use_case;

pub use create_topic_use_case::{
    CreateTopicCommand, CreateTopicError, CreateTopicUseCase, TopicCommandError,
    TOPIC_TEXT_MAX_LEN,
};
pub use get_topic_use_case::{GetTopicDetailUseCase, GetTopicError, GetTopicUseCase, TopicDetail};
pub use get_topics_use_case::{GetTopicsError, GetTopicsUseCase};
