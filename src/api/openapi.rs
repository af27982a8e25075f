use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::learning_log::adapter::incoming::web::routes::{
    self, EntryFormView, EntryView, IndexView, RouteLink, TopicDetailView, TopicListView, TopicView,
};
use crate::learning_log::application::forms::{EntryForm, FieldError, TopicForm};
use crate::shared::api::RedirectBody;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Learning Log API",
        version = "0.1.0",
        description = "Topics a user is learning about, and the dated entries they write for each"
    ),
    paths(
        routes::index::index_handler,
        routes::get_topics::get_topics_handler,
        routes::get_topic::get_topic_handler,
        routes::new_topic::new_topic_form_handler,
        routes::new_topic::create_topic_handler,
        routes::new_entry::new_entry_form_handler,
        routes::new_entry::create_entry_handler,
        routes::edit_entry::edit_entry_form_handler,
        routes::edit_entry::edit_entry_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<TopicListView>,
            ErrorResponse,
            ErrorDetail,
            RedirectBody,

            // Views
            IndexView,
            RouteLink,
            TopicView,
            EntryView,
            TopicListView,
            TopicDetailView,
            EntryFormView,

            // Forms
            TopicForm,
            EntryForm,
            FieldError
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "learning_log", description = "Topics and entries of the logged-in user"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token issued by the identity provider"))
                        .build(),
                ),
            )
        }
    }
}
